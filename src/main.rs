//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zcovid library and
//! the Zellij plugin system. It translates host events into library events,
//! runs them through [`handle_event`], and turns the resulting actions into
//! host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permission**: Request `WebAccess`; nothing is fetched until granted
//! 3. **Subscribe**: Register for Key, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Requests
//!
//! Every fetch is a `web_request` whose context map carries the endpoint, so
//! the `WebRequestResult` can be routed back without any plugin-side
//! bookkeeping.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`/`Down`: Move down
//! - `Ctrl+p`/`Up`: Move up
//! - `Enter`: Open country details
//!
//! In normal mode:
//! - `j`/`k`: Move down/up
//! - `1`/`2`/`3`: Countries, global, regions
//! - `Tab`: Next screen
//! - `h`/`l`, `Left`/`Right`: Previous/next region tab
//! - `/`: Search countries
//! - `Esc`/`Backspace`: Back from country details
//! - `r`: Reload the current screen
//! - `q`: Close plugin
//!
//! In search mode:
//! - Printable keys: Type into the query
//! - `Tab`: Move focus to the results
//! - `/`: Return to search input
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zcovid::api::{request_headers, Endpoint};
use zcovid::app::SearchFocus;
use zcovid::{handle_event, Action, Config, Event, InputMode, Screen};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: zcovid::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zcovid::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds state, requests `WebAccess` and subscribes.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zcovid::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = zcovid::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zcovid::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        // The query survives a visit to the details screen, but keys there
        // follow normal mode.
        match self.app.input_mode {
            InputMode::Search(focus) if self.app.screen == Screen::Countries => {
                Self::map_search_key(key.bare_key, focus)
            }
            _ => self.map_normal_key(key.bare_key),
        }
    }

    fn map_search_key(bare_key: BareKey, focus: SearchFocus) -> Option<Event> {
        Some(match bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Select,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Tab => Event::FocusResults,
            BareKey::Char('/') => Event::FocusSearchBar,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char('j') if focus == SearchFocus::Navigating => Event::KeyDown,
            BareKey::Char('k') if focus == SearchFocus::Navigating => Event::KeyUp,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_normal_key(&self, bare_key: BareKey) -> Option<Event> {
        let in_details = self.app.screen == Screen::CountryDetails;

        Some(match bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Select,
            BareKey::Esc | BareKey::Backspace if in_details => Event::Back,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('1') => Event::ShowScreen(Screen::Countries),
            BareKey::Char('2') => Event::ShowScreen(Screen::Global),
            BareKey::Char('3') => Event::ShowScreen(Screen::Regions),
            BareKey::Tab => Event::NextScreen,
            BareKey::Left | BareKey::Char('h') => Event::PreviousRegion,
            BareKey::Right | BareKey::Char('l') => Event::NextRegion,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Routes a finished web request back to the endpoint stored in its context.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        match Endpoint::from_context(context) {
            Some(endpoint) => {
                tracing::debug!(endpoint = endpoint.name(), status, bytes = body.len(), "web request result");
                Some(Event::ResponseReceived {
                    endpoint,
                    status,
                    body,
                })
            }
            None => {
                tracing::debug!(context = ?context, "ignoring web request result without endpoint context");
                None
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(endpoint) => {
                let url = endpoint.url(&self.app.base_url);
                tracing::debug!(url = %url, "issuing web request");
                web_request(
                    url,
                    HttpVerb::Get,
                    request_headers(),
                    vec![],
                    endpoint.to_context(),
                );
            }
        }
    }
}

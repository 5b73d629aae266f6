//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes in response
//! to the outside world. It returns whether the UI should re-render plus the
//! [`Action`]s the plugin shim must execute, which keeps this module free of
//! Zellij calls and therefore testable natively.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Select`, `Back`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `Char`, `Backspace`, `ExitSearch`
//! - **Screens**: `ShowScreen`, `NextScreen`, `NextRegion`, `PreviousRegion`, `Refresh`
//! - **System**: `PermissionsResult`, `ResponseReceived`
//!
//! # Fetch rules
//!
//! A screen fetches its data the first time it is shown, `Refresh` fetches it
//! again, and clearing a non-empty search query reloads the country list.

use super::modes::{InputMode, Permission, Screen, SearchFocus};
use crate::api::{decode_response, Endpoint};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or by the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one (wraps to top).
    KeyDown,
    /// Moves selection up by one (wraps to bottom).
    KeyUp,
    /// Hides the plugin.
    CloseFocus,
    /// Opens details for the highlighted country.
    Select,
    /// Leaves the details screen.
    Back,

    /// Enters search mode with typing focus (countries screen only).
    SearchMode,
    /// Focuses the search input again while navigating results.
    FocusSearchBar,
    /// Moves focus from the search input to the results.
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,

    /// Jumps to a top-level screen.
    ShowScreen(Screen),
    /// Cycles to the next top-level screen.
    NextScreen,
    /// Next region tab.
    NextRegion,
    /// Previous region tab.
    PreviousRegion,
    /// Re-fetches the data behind the current screen.
    Refresh,

    /// Answer to the `WebAccess` permission request.
    PermissionsResult {
        granted: bool,
    },

    /// A web request finished.
    ResponseReceived {
        endpoint: Endpoint,
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI should re-render.
///
/// # Errors
///
/// Currently infallible; decode and HTTP failures are stored in the state and
/// shown on screen rather than returned, so one bad response never stops the
/// event loop.
///
/// # Examples
///
/// ```
/// use zcovid::app::{handle_event, Action, AppState, Event, Screen};
/// use zcovid::api::Endpoint;
/// use zcovid::domain::ReferenceTable;
/// use zcovid::ui::Theme;
///
/// let mut state = AppState::new(
///     ReferenceTable::from_entries(vec![]),
///     Theme::default(),
///     "https://api.covid19api.com",
///     Screen::Countries,
/// );
/// let (render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
/// assert!(render);
/// assert_eq!(actions, vec![Action::Fetch(Endpoint::Countries)]);
/// # Ok::<(), zcovid::ZcovidError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Select => {
            let Some(country) = state.open_selected() else {
                tracing::debug!(screen = ?state.screen, "nothing to select");
                return Ok((false, vec![]));
            };
            let actions = state
                .request(Endpoint::DayOne { slug: country.slug })
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::Back => Ok((state.close_details(), vec![])),
        Event::SearchMode => {
            if state.screen != Screen::Countries {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, clear_query(state)))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            if state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                tracing::debug!("search query cleared, reloading countries");
                let actions = state.request(Endpoint::Countries).into_iter().collect();
                state.apply_search_filter();
                return Ok((true, actions));
            }
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::ShowScreen(screen) => Ok(show_screen(state, *screen)),
        Event::NextScreen => {
            let next = state.screen.next();
            Ok(show_screen(state, next))
        }
        Event::NextRegion | Event::PreviousRegion => {
            if state.screen != Screen::Regions {
                return Ok((false, vec![]));
            }
            state.cycle_region(matches!(event, Event::NextRegion));
            Ok((true, vec![]))
        }
        Event::Refresh => {
            let Some(endpoint) = state.screen_endpoint() else {
                return Ok((false, vec![]));
            };
            tracing::debug!(endpoint = endpoint.name(), "refresh requested");
            let actions: Vec<Action> = state.request(endpoint).into_iter().collect();
            Ok((!actions.is_empty(), actions))
        }
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("web access granted");
                state.permission = Permission::Granted;
                Ok((true, fetch_if_idle(state)))
            } else {
                tracing::warn!("web access denied - statistics cannot be fetched");
                state.permission = Permission::Denied;
                Ok((true, vec![]))
            }
        }
        Event::ResponseReceived {
            endpoint,
            status,
            body,
        } => {
            match decode_response(endpoint, *status, body, &state.base_url) {
                Ok(payload) => state.apply_payload(payload),
                Err(e) => {
                    tracing::error!(endpoint = endpoint.name(), status = *status, error = %e, "fetch failed");
                    state.apply_failure(endpoint, e.to_string());
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// Switches screens and fetches the new screen's data if it was never loaded.
fn show_screen(state: &mut AppState, screen: Screen) -> (bool, Vec<Action>) {
    if state.screen == screen {
        return (false, vec![]);
    }

    tracing::debug!(from = ?state.screen, to = ?screen, "switching screen");
    let mut actions = vec![];
    if matches!(state.input_mode, InputMode::Search(_)) {
        state.input_mode = InputMode::Normal;
        actions = clear_query(state);
    }
    state.screen = screen;
    actions.extend(fetch_if_idle(state));
    (true, actions)
}

/// Clears the search query, reloading the country list if it was non-empty.
fn clear_query(state: &mut AppState) -> Vec<Action> {
    if state.search_query.is_empty() {
        return vec![];
    }
    state.search_query.clear();
    let actions = state.request(Endpoint::Countries).into_iter().collect();
    state.apply_search_filter();
    actions
}

fn fetch_if_idle(state: &mut AppState) -> Vec<Action> {
    if !state.screen_data_idle() {
        return vec![];
    }
    state
        .screen_endpoint()
        .and_then(|endpoint| state.request(endpoint))
        .into_iter()
        .collect()
}

/// Logs response events without their body.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::ResponseReceived {
                endpoint,
                status,
                body,
            } => write!(f, "ResponseReceived({}, {status}, {} bytes)", endpoint.name(), body.len()),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReferenceEntry, ReferenceTable};
    use crate::ui::Theme;

    const COUNTRIES: &[u8] = br#"[
        {"Country": "France", "Slug": "france", "ISO2": "FR"},
        {"Country": "Australia", "Slug": "australia", "ISO2": "AU"},
        {"Country": "Austria", "Slug": "austria", "ISO2": "AT"}
    ]"#;

    fn state(screen: Screen) -> AppState {
        let reference = ReferenceTable::from_entries(vec![ReferenceEntry::new("France", "Europe")]);
        AppState::new(reference, Theme::default(), "http://api.test", screen)
    }

    fn loaded_countries() -> AppState {
        let mut state = state(Screen::Countries);
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        handle_event(
            &mut state,
            &Event::ResponseReceived {
                endpoint: Endpoint::Countries,
                status: 200,
                body: COUNTRIES.to_vec(),
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn permission_grant_fetches_start_screen_data() {
        let mut state = state(Screen::Regions);
        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert_eq!(actions, vec![Action::Fetch(Endpoint::Summary)]);
    }

    #[test]
    fn permission_denied_fetches_nothing() {
        let mut state = state(Screen::Countries);
        let (render, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.permission, Permission::Denied);

        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn summary_is_shared_between_global_and_regions() {
        let mut state = state(Screen::Global);
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::ShowScreen(Screen::Regions)).unwrap();
        assert!(actions.is_empty(), "summary already in flight");
    }

    #[test]
    fn select_opens_details_and_fetches_day_one() {
        let mut state = loaded_countries();
        handle_event(&mut state, &Event::KeyDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(state.screen, Screen::CountryDetails);
        assert_eq!(
            actions,
            vec![Action::Fetch(Endpoint::DayOne { slug: "austria".into() })]
        );

        handle_event(&mut state, &Event::Back).unwrap();
        assert_eq!(state.screen, Screen::Countries);
    }

    #[test]
    fn typing_outside_search_is_ignored() {
        let mut state = loaded_countries();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn clearing_query_reloads_countries() {
        let mut state = loaded_countries();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('f')).unwrap();
        assert_eq!(state.filtered_countries.len(), 1);

        let (_, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(actions, vec![Action::Fetch(Endpoint::Countries)]);
        assert!(state.countries.is_loading());
    }

    #[test]
    fn backspace_on_empty_query_does_not_reload() {
        let mut state = loaded_countries();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn http_error_is_stored_not_returned() {
        let mut state = loaded_countries();
        let result = handle_event(
            &mut state,
            &Event::ResponseReceived {
                endpoint: Endpoint::Countries,
                status: 500,
                body: vec![],
            },
        );
        assert!(result.is_ok());
        assert_eq!(
            state.countries,
            crate::app::state::Remote::Failed("HTTP 500 from http://api.test/countries".into())
        );
    }

    #[test]
    fn region_keys_only_apply_on_regions_screen() {
        let mut state = loaded_countries();
        let (render, _) = handle_event(&mut state, &Event::NextRegion).unwrap();
        assert!(!render);
    }
}

//! Zcovid: a Zellij plugin for browsing COVID-19 statistics.
//!
//! Zcovid is a terminal multiplexer plugin that provides:
//! - A searchable list of countries with their day-one case history
//! - Worldwide totals from the daily summary
//! - Per-continent statistics, classified with a bundled reference table
//! - Remote data fetched through the host's web request facility

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ API Layer     │
//! │ (ui/)         │                       │ (api/)        │
//! │ - Rendering   │                       │ - Endpoints   │
//! │ - Theming     │                       │ - Wire format │
//! │ - Components  │                       │ - Decoding    │
//! └───────────────┘                       └───────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Countries, statistics, regions (domain/)         │
//! │  - Substring search (domain/search)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - JSON lines span export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zcovid.wasm" {
//!         api_base_url "https://api.covid19api.com"
//!         start_screen "regions"
//!         theme "catppuccin-mocha"
//!         reference_file "~/.config/zcovid/countries.json"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse the configuration, install tracing,
//!    build the `AppState`, request `WebAccess` and subscribe to events.
//! 2. **Permission Result**: once granted, the data behind the start screen
//!    is requested with `web_request`.
//! 3. **Web Request Result**: the response is decoded by [`api`] and folded
//!    into state; failures become an error empty state.
//! 4. **Rendering**: the view model is computed from state and drawn by the
//!    component renderers.
//!
//! # Example
//!
//! ```rust
//! use zcovid::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), zcovid::ZcovidError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen};
pub use domain::{Result, ZcovidError};
pub use ui::Theme;

use domain::ReferenceTable;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the statistics API, without a trailing slash.
    pub api_base_url: String,

    /// Screen shown on load.
    pub start_screen: Screen,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme: String,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Path to a JSON country-to-continent table replacing the bundled one.
    pub reference_file: Option<String>,

    /// `EnvFilter` directive for the span log. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
            start_screen: Screen::Countries,
            theme: ui::theme::DEFAULT_THEME.to_string(),
            theme_file: None,
            reference_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Values that are empty or invalid keep their
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcovid::{Config, Screen};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "http://localhost:8080/".to_string());
    /// map.insert("start_screen".to_string(), "Global".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url, "http://localhost:8080");
    /// assert_eq!(config.start_screen, Screen::Global);
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let api_base_url = value("api_base_url")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let start_screen = value("start_screen").map_or(defaults.start_screen, |raw| {
            parse_screen(&raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid start screen, using default");
                defaults.start_screen
            })
        });

        Self {
            api_base_url,
            start_screen,
            theme: value("theme").unwrap_or(defaults.theme),
            theme_file: value("theme_file"),
            reference_file: value("reference_file"),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

fn parse_screen(raw: &str) -> Result<Screen> {
    Screen::from_config(raw).ok_or_else(|| {
        ZcovidError::Config(format!(
            "start_screen must be countries, global or regions, got {raw:?}"
        ))
    })
}

/// Resolves the theme: custom file first, then built-in name, then default.
fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(infrastructure::resolve_path(theme_file)) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file");
            }
        }
    }

    Theme::from_name(&config.theme).unwrap_or_else(|| {
        tracing::debug!(theme_name = %config.theme, "unknown theme, using default");
        Theme::default()
    })
}

/// Resolves the reference table: configured file first, then the bundled one.
fn load_reference(config: &Config) -> ReferenceTable {
    if let Some(reference_file) = &config.reference_file {
        match ReferenceTable::from_file(infrastructure::resolve_path(reference_file)) {
            Ok(table) => return table,
            Err(e) => {
                tracing::debug!(reference_file = %reference_file, error = %e, "failed to load reference table, using bundled");
            }
        }
    }

    ReferenceTable::bundled().unwrap_or_else(|e| {
        tracing::error!(error = %e, "bundled reference table is unreadable");
        ReferenceTable::from_entries(vec![])
    })
}

/// Builds the initial application state from configuration.
///
/// No request is made here: fetching waits for the `WebAccess` permission.
///
/// # Example
///
/// ```rust
/// use zcovid::{initialize, Config, Screen};
///
/// let config = Config {
///     start_screen: Screen::Regions,
///     ..Config::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.screen, Screen::Regions);
/// assert!(!state.reference.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.api_base_url, "initializing zcovid plugin");

    AppState::new(
        load_reference(config),
        load_theme(config),
        config.api_base_url.clone(),
        config.start_screen,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = Config::from_zellij(&map(&[
            ("start_screen", "details"),
            ("api_base_url", "/"),
            ("trace_level", "   "),
        ]));

        assert_eq!(config.start_screen, Screen::Countries);
        assert_eq!(config.api_base_url, api::DEFAULT_BASE_URL);
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn paths_are_kept_verbatim() {
        let config = Config::from_zellij(&map(&[
            ("theme_file", "~/themes/mine.toml"),
            ("reference_file", "countries.json"),
        ]));

        assert_eq!(config.theme_file.as_deref(), Some("~/themes/mine.toml"));
        assert_eq!(config.reference_file.as_deref(), Some("countries.json"));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: "solarized".to_string(),
            ..Config::default()
        };
        assert_eq!(load_theme(&config), Theme::default());
    }

    #[test]
    fn missing_reference_file_falls_back_to_bundled() {
        let config = Config {
            reference_file: Some("/nonexistent/zcovid/countries.json".to_string()),
            ..Config::default()
        };
        let table = load_reference(&config);
        assert_eq!(table.len(), ReferenceTable::bundled().unwrap().len());
    }

    #[test]
    fn parse_screen_reports_config_error() {
        let err = parse_screen("details").unwrap_err();
        assert!(matches!(err, ZcovidError::Config(_)));
    }
}

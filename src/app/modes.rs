//! Screen and input mode state machine types.
//!
//! The plugin shows one [`Screen`] at a time. Three of them are top-level
//! destinations reachable with `1`/`2`/`3` or `Tab`; [`Screen::CountryDetails`]
//! is only entered by selecting a country and left with `Esc`.
//!
//! Orthogonal to the screen, [`InputMode`] decides whether keys navigate or
//! edit the search query. Search is only available on the countries screen.

/// Screens the plugin can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Searchable list of all countries.
    Countries,
    /// Day-one and current statistics of the selected country.
    CountryDetails,
    /// Worldwide totals from the summary endpoint.
    Global,
    /// Summary countries grouped by continent, one tab per region.
    Regions,
}

impl Screen {
    /// Parses the `start_screen` configuration value.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcovid::app::Screen;
    ///
    /// assert_eq!(Screen::from_config("Global"), Some(Screen::Global));
    /// assert_eq!(Screen::from_config("details"), None);
    /// ```
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "countries" => Some(Self::Countries),
            "global" => Some(Self::Global),
            "regions" => Some(Self::Regions),
            _ => None,
        }
    }

    /// The next top-level screen in `Tab` order, wrapping around.
    ///
    /// The details screen counts as part of the countries screen.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Countries | Self::CountryDetails => Self::Global,
            Self::Global => Self::Regions,
            Self::Regions => Self::Countries,
        }
    }
}

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the query.
    Typing,
    /// Keys move through the filtered results; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command keys.
    Normal,
    /// Search bar visible, with the given focus.
    Search(SearchFocus),
}

/// Outcome of the `WebAccess` permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Requested on load, no answer yet.
    Pending,
    Granted,
    Denied,
}

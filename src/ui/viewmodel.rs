//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready strings only: numbers are already
//! formatted, names already truncated, and highlight ranges already computed.
//! Nothing here refers back to application state.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Region tabs, only present on the regional statistics screen.
    pub tabs: Option<TabsInfo>,

    /// Search box, only present while searching the country list.
    pub search_bar: Option<SearchBarInfo>,

    /// Main content area.
    pub body: Body,

    /// Index of the selected row within the visible window of a table body.
    pub selected_index: usize,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// What fills the area between the header and the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Country list: name and slug columns.
    Countries(Vec<CountryRow>),
    /// Per-country summary rows of one region tab.
    Regions(Vec<SummaryRow>),
    /// Labelled statistic blocks (global summary, country details).
    Stats(Vec<StatSection>),
    /// Nothing to show, with an explanation.
    Empty(EmptyState),
}

/// One row of the country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub name: String,
    pub slug: String,
    pub is_selected: bool,

    /// Character ranges of the slug to highlight as search matches.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One row of a region tab, counts already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub country: String,
    pub new_confirmed: String,
    pub total_confirmed: String,
    pub new_deaths: String,
    pub total_deaths: String,
    pub new_recovered: String,
    pub total_recovered: String,
    pub is_selected: bool,
}

/// A titled block of label/value lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSection {
    pub title: String,
    pub lines: Vec<StatLine>,
}

/// A single `label: value` line inside a [`StatSection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

impl StatLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Dimmed text after the title, e.g. the snapshot date.
    pub subtitle: Option<String>,
}

/// Region tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsInfo {
    pub labels: Vec<String>,
    pub active: usize,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown while loading, after a failure, and when a list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Loading...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

impl EmptyState {
    pub fn new(message: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
}

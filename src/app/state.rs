//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It owns the
//! fetched data (country list, summary snapshot, day-one report), the derived
//! views of it (search results, region classification), and the transient UI
//! state (screen, input mode, selections).
//!
//! # Remote data
//!
//! Every fetched value is wrapped in [`Remote`], so the view model can tell
//! "not requested yet" from "in flight" from "failed". Data is fetched once per
//! screen and reused; only an explicit refresh or clearing the search query
//! requests it again.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns the current state and terminal size into a
//! [`UIViewModel`]. It windows long lists around the selection, formats
//! counts, and computes search highlight ranges.

use super::modes::{InputMode, Permission, Screen, SearchFocus};
use super::Action;
use crate::api::{Endpoint, Payload};
use crate::domain::{
    filter_by_substring, match_range, sort_by_name, Country, CountrySummary, DayOneReport,
    ReferenceTable, Region, SubstringFilter, SummarySnapshot,
};
use crate::ui::helpers::{country_name_width, format_count, summary_name_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CountryRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatLine, StatSection,
    SummaryRow, TabsInfo, UIViewModel,
};

/// Rows taken by the header, borders, table head and footer.
const CHROME_ROWS: usize = 6;
/// Extra rows taken by the search box.
const SEARCH_ROWS: usize = 3;
/// Extra rows taken by the region tab strip.
const TAB_ROWS: usize = 1;

/// Lifecycle of a value fetched from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    /// Never requested.
    Idle,
    /// Request issued, response pending.
    Loading,
    Ready(T),
    /// The request or decoding failed; the message is shown to the user.
    Failed(String),
}

impl<T> Remote<T> {
    /// The value, if it has arrived.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// The country shown on the details screen and its day-one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetails {
    pub country: Country,

    /// `Ready(None)` means the country has no day-one records.
    pub report: Remote<Option<DayOneReport>>,

    /// Screen to go back to.
    pub return_to: Screen,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Screen currently displayed.
    pub screen: Screen,

    /// Whether keys navigate or edit the search query.
    pub input_mode: InputMode,

    /// `WebAccess` permission state. Nothing is fetched until it is granted.
    pub permission: Permission,

    /// Current search query on the countries screen.
    pub search_query: String,

    /// Master country list, sorted by name.
    pub countries: Remote<Vec<Country>>,

    /// Countries matching `search_query`, or all of them when it is empty.
    pub filtered_countries: Vec<Country>,

    /// Selection within `filtered_countries`.
    pub selected_index: usize,

    /// Details screen content, present once a country was opened.
    pub details: Option<CountryDetails>,

    /// Summary snapshot shared by the global and regional screens.
    pub summary: Remote<SummarySnapshot>,

    /// Active region tab.
    pub region: Region,

    /// Selection within the active region tab.
    pub region_index: usize,

    /// Country-to-continent table used for region classification.
    pub reference: ReferenceTable,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// API root, without trailing slash.
    pub base_url: String,
}

impl AppState {
    /// Creates the initial state showing `start_screen`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcovid::app::{AppState, Permission, Screen};
    /// use zcovid::domain::ReferenceTable;
    /// use zcovid::ui::Theme;
    ///
    /// let state = AppState::new(
    ///     ReferenceTable::from_entries(vec![]),
    ///     Theme::default(),
    ///     "https://api.covid19api.com",
    ///     Screen::Global,
    /// );
    /// assert_eq!(state.screen, Screen::Global);
    /// assert_eq!(state.permission, Permission::Pending);
    /// ```
    #[must_use]
    pub fn new(
        reference: ReferenceTable,
        theme: Theme,
        base_url: impl Into<String>,
        start_screen: Screen,
    ) -> Self {
        Self {
            screen: start_screen,
            input_mode: InputMode::Normal,
            permission: Permission::Pending,
            search_query: String::new(),
            countries: Remote::Idle,
            filtered_countries: vec![],
            selected_index: 0,
            details: None,
            summary: Remote::Idle,
            region: Region::Europe,
            region_index: 0,
            reference,
            theme,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint backing the current screen.
    #[must_use]
    pub fn screen_endpoint(&self) -> Option<Endpoint> {
        match self.screen {
            Screen::Countries => Some(Endpoint::Countries),
            Screen::Global | Screen::Regions => Some(Endpoint::Summary),
            Screen::CountryDetails => self.details.as_ref().map(|details| Endpoint::DayOne {
                slug: details.country.slug.clone(),
            }),
        }
    }

    /// Whether the current screen's data has never been requested.
    #[must_use]
    pub fn screen_data_idle(&self) -> bool {
        match self.screen {
            Screen::Countries => self.countries.is_idle(),
            Screen::Global | Screen::Regions => self.summary.is_idle(),
            Screen::CountryDetails => self
                .details
                .as_ref()
                .is_some_and(|details| details.report.is_idle()),
        }
    }

    /// Marks the endpoint's data as loading and returns the fetch action.
    ///
    /// Returns `None` while web access is not granted; the data stays idle and
    /// is requested once the permission arrives.
    pub fn request(&mut self, endpoint: Endpoint) -> Option<Action> {
        if self.permission != Permission::Granted {
            tracing::debug!(endpoint = endpoint.name(), permission = ?self.permission, "fetch deferred");
            return None;
        }

        match &endpoint {
            Endpoint::Countries => self.countries = Remote::Loading,
            Endpoint::Summary => self.summary = Remote::Loading,
            Endpoint::DayOne { slug } => {
                if let Some(details) = self.details.as_mut().filter(|d| &d.country.slug == slug) {
                    details.report = Remote::Loading;
                }
            }
        }

        tracing::debug!(endpoint = endpoint.name(), "fetch requested");
        Some(Action::Fetch(endpoint))
    }

    /// Stores a decoded response.
    ///
    /// Day-one responses for a country that is no longer displayed are
    /// dropped.
    pub fn apply_payload(&mut self, payload: Payload) {
        match payload {
            Payload::Countries(mut countries) => {
                sort_by_name(&mut countries);
                tracing::debug!(count = countries.len(), "countries loaded");
                self.countries = Remote::Ready(countries);
                self.apply_search_filter();
            }
            Payload::Summary(snapshot) => {
                let unmatched = self.reference.unmatched(&snapshot.countries);
                if !unmatched.is_empty() {
                    tracing::debug!(count = unmatched.len(), names = ?unmatched, "summary countries without region");
                }
                self.summary = Remote::Ready(snapshot);
                self.clamp_region_index();
            }
            Payload::DayOne { slug, series } => {
                match self.details.as_mut().filter(|d| d.country.slug == slug) {
                    Some(details) => {
                        tracing::debug!(slug = %slug, days = series.len(), "day one series loaded");
                        details.report = Remote::Ready(DayOneReport::from_series(&series));
                    }
                    None => tracing::debug!(slug = %slug, "dropping stale day one series"),
                }
            }
        }
    }

    /// Records a failed request so the screen can explain it.
    pub fn apply_failure(&mut self, endpoint: &Endpoint, message: String) {
        match endpoint {
            Endpoint::Countries => self.countries = Remote::Failed(message),
            Endpoint::Summary => self.summary = Remote::Failed(message),
            Endpoint::DayOne { slug } => {
                if let Some(details) = self.details.as_mut().filter(|d| &d.country.slug == slug) {
                    details.report = Remote::Failed(message);
                }
            }
        }
    }

    /// Recomputes `filtered_countries` from the master list and the query.
    ///
    /// An empty query shows the master list unchanged. Callers that cleared a
    /// non-empty query also request a fresh country list.
    pub fn apply_search_filter(&mut self) {
        let master = self.countries.ready().map_or(&[][..], Vec::as_slice);

        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_countries = master.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.filtered_countries =
            match filter_by_substring(&self.search_query, master, |c| c.slug.as_str()) {
                SubstringFilter::NoFilter => master.to_vec(),
                SubstringFilter::Matches(found) => found.into_iter().cloned().collect(),
            };

        if self.filtered_countries.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_countries.len() - 1);
        }

        tracing::debug!(filtered_count = self.filtered_countries.len(), "search filter applied");
    }

    /// Countries of the active region tab, in summary order.
    ///
    /// Empty until the summary has arrived.
    #[must_use]
    pub fn region_countries(&self) -> Vec<&CountrySummary> {
        self.summary.ready().map_or_else(Vec::new, |snapshot| {
            self.reference
                .classify_by_region(self.region.label(), &snapshot.countries)
        })
    }

    /// Currently selected entry of the country list.
    #[must_use]
    pub fn selected_country(&self) -> Option<&Country> {
        self.filtered_countries.get(self.selected_index)
    }

    /// Moves the selection of the current list down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let index = self.current_index_mut();
        *index = (*index + 1) % len;
    }

    /// Moves the selection of the current list up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let index = self.current_index_mut();
        *index = if *index == 0 { len - 1 } else { *index - 1 };
    }

    /// Switches to the next or previous region tab and resets its selection.
    pub fn cycle_region(&mut self, forward: bool) {
        self.region = if forward {
            self.region.next()
        } else {
            self.region.previous()
        };
        self.region_index = 0;
        tracing::debug!(region = self.region.label(), "region tab changed");
    }

    /// Opens the details screen for the selected country.
    ///
    /// Works from the country list and from a region tab. Returns the
    /// country whose day-one series should be fetched.
    pub fn open_selected(&mut self) -> Option<Country> {
        let country = match self.screen {
            Screen::Countries => self.selected_country().cloned()?,
            Screen::Regions => {
                let summary = *self.region_countries().get(self.region_index)?;
                Country::new(
                    summary.country.clone(),
                    summary.slug.clone(),
                    summary.country_code.clone(),
                )
            }
            Screen::Global | Screen::CountryDetails => return None,
        };

        tracing::debug!(country = %country.name, slug = %country.slug, "opening country details");
        self.details = Some(CountryDetails {
            country: country.clone(),
            report: Remote::Idle,
            return_to: self.screen,
        });
        self.screen = Screen::CountryDetails;
        Some(country)
    }

    /// Leaves the details screen. Returns `false` if not on it.
    pub fn close_details(&mut self) -> bool {
        if self.screen != Screen::CountryDetails {
            return false;
        }
        self.screen = self
            .details
            .as_ref()
            .map_or(Screen::Countries, |details| details.return_to);
        true
    }

    fn current_list_len(&self) -> usize {
        match self.screen {
            Screen::Regions => self.region_countries().len(),
            _ => self.filtered_countries.len(),
        }
    }

    fn current_index_mut(&mut self) -> &mut usize {
        match self.screen {
            Screen::Regions => &mut self.region_index,
            _ => &mut self.selected_index,
        }
    }

    fn clamp_region_index(&mut self) {
        let len = self.region_countries().len();
        self.region_index = self.region_index.min(len.saturating_sub(1));
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcovid::app::{AppState, Screen};
    /// use zcovid::domain::ReferenceTable;
    /// use zcovid::ui::{viewmodel::Body, Theme};
    ///
    /// let state = AppState::new(
    ///     ReferenceTable::from_entries(vec![]),
    ///     Theme::default(),
    ///     "https://api.covid19api.com",
    ///     Screen::Countries,
    /// );
    /// let vm = state.compute_viewmodel(24, 80);
    /// assert!(matches!(vm.body, Body::Empty(_)));
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let (body, selected_index) = match self.permission {
            Permission::Pending => (
                Body::Empty(EmptyState::new(
                    "Waiting for permission",
                    "Allow web access to fetch COVID-19 statistics",
                )),
                0,
            ),
            Permission::Denied => (
                Body::Empty(EmptyState::new(
                    "Web access denied",
                    "zcovid needs the WebAccess permission to reach the statistics API",
                )),
                0,
            ),
            Permission::Granted => match self.screen {
                Screen::Countries => self.countries_body(rows, cols),
                Screen::CountryDetails => (self.details_body(), 0),
                Screen::Global => (self.global_body(), 0),
                Screen::Regions => self.regions_body(rows, cols),
            },
        };

        UIViewModel {
            header: self.compute_header(),
            tabs: self.compute_tabs(),
            search_bar: self.compute_search_bar(),
            body,
            selected_index,
            footer: self.compute_footer(),
        }
    }

    fn countries_body(&self, rows: usize, cols: usize) -> (Body, usize) {
        if let Some(empty) = Self::remote_empty_state(&self.countries, "/countries") {
            return (Body::Empty(empty), 0);
        }

        if self.filtered_countries.is_empty() {
            let empty = if self.search_query.is_empty() {
                EmptyState::new("No countries", "The API returned an empty country list")
            } else {
                EmptyState::new(
                    "No matching countries",
                    format!("No slug contains '{}'", self.search_query),
                )
            };
            return (Body::Empty(empty), 0);
        }

        let available = self.available_rows(rows);
        let (start, end) = visible_window(self.selected_index, self.filtered_countries.len(), available);
        let name_width = country_name_width(cols);
        let highlight = !self.search_query.is_empty();

        let rows = self.filtered_countries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, country)| {
                let slug = truncate(&country.slug, cols.saturating_sub(name_width));
                let highlight_ranges = if highlight {
                    visible_match(&country.slug, &slug, &self.search_query)
                        .into_iter()
                        .collect()
                } else {
                    vec![]
                };
                CountryRow {
                    name: truncate(&country.name, name_width.saturating_sub(2)),
                    slug,
                    is_selected: start + offset == self.selected_index,
                    highlight_ranges,
                }
            })
            .collect();

        (Body::Countries(rows), self.selected_index - start)
    }

    fn details_body(&self) -> Body {
        let Some(details) = &self.details else {
            return Body::Empty(EmptyState::new("No country selected", "Press Esc to go back"));
        };

        let path = format!("/dayone/country/{}", details.country.slug);
        if let Some(empty) = Self::remote_empty_state(&details.report, &path) {
            return Body::Empty(empty);
        }

        let Some(Some(report)) = details.report.ready() else {
            return Body::Empty(EmptyState::new(
                "No day one data",
                format!("{} has not reported any cases", details.country.name),
            ));
        };

        Body::Stats(vec![
            StatSection {
                title: "Day One Statistics".to_string(),
                lines: vec![
                    StatLine::new("Date of first case", report.first.date.format("%Y-%m-%d").to_string()),
                    StatLine::new("Number of first day cases", format_count(report.first.confirmed)),
                    StatLine::new("Day one cases still active", format_count(report.first.active)),
                ],
            },
            StatSection {
                title: "Current Statistics".to_string(),
                lines: vec![
                    StatLine::new("Confirmed", format_count(report.latest.confirmed)),
                    StatLine::new("Active", format_count(report.latest.active)),
                    StatLine::new("Total recovered", format_count(report.latest.recovered)),
                    StatLine::new("Total deaths", format_count(report.latest.deaths)),
                ],
            },
        ])
    }

    fn global_body(&self) -> Body {
        if let Some(empty) = Self::remote_empty_state(&self.summary, "/summary") {
            return Body::Empty(empty);
        }
        let Some(snapshot) = self.summary.ready() else {
            return Body::Empty(EmptyState::new("No summary", "Press r to refresh"));
        };

        let global = snapshot.global;
        Body::Stats(vec![
            StatSection {
                title: "Confirmed".to_string(),
                lines: vec![
                    StatLine::new("New confirmed", format_count(global.new_confirmed)),
                    StatLine::new("Total confirmed", format_count(global.total_confirmed)),
                ],
            },
            StatSection {
                title: "Deaths".to_string(),
                lines: vec![
                    StatLine::new("New deaths", format_count(global.new_deaths)),
                    StatLine::new("Total deaths", format_count(global.total_deaths)),
                ],
            },
            StatSection {
                title: "Recovered".to_string(),
                lines: vec![
                    StatLine::new("New recovered", format_count(global.new_recovered)),
                    StatLine::new("Total recovered", format_count(global.total_recovered)),
                ],
            },
        ])
    }

    fn regions_body(&self, rows: usize, cols: usize) -> (Body, usize) {
        if let Some(empty) = Self::remote_empty_state(&self.summary, "/summary") {
            return (Body::Empty(empty), 0);
        }

        let countries = self.region_countries();
        if countries.is_empty() {
            return (
                Body::Empty(EmptyState::new(
                    format!("No countries in {}", self.region.label()),
                    "h/l: switch region  r: refresh",
                )),
                0,
            );
        }

        let available = self.available_rows(rows);
        let (start, end) = visible_window(self.region_index, countries.len(), available);
        let name_width = summary_name_width(cols);

        let rows = countries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, summary)| SummaryRow {
                country: truncate(&summary.country, name_width.saturating_sub(1)),
                new_confirmed: format_count(summary.new_confirmed),
                total_confirmed: format_count(summary.total_confirmed),
                new_deaths: format_count(summary.new_deaths),
                total_deaths: format_count(summary.total_deaths),
                new_recovered: format_count(summary.new_recovered),
                total_recovered: format_count(summary.total_recovered),
                is_selected: start + offset == self.region_index,
            })
            .collect();

        (Body::Regions(rows), self.region_index - start)
    }

    /// Empty state for data that is not ready, `None` once it is.
    fn remote_empty_state<T>(remote: &Remote<T>, path: &str) -> Option<EmptyState> {
        match remote {
            Remote::Ready(_) => None,
            Remote::Idle => Some(EmptyState::new("No data yet", "Press r to load")),
            Remote::Loading => Some(EmptyState::new("Loading...", format!("Fetching {path}"))),
            Remote::Failed(message) => Some(EmptyState::new(
                "Could not load data",
                format!("{message}  (r: retry)"),
            )),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let (title, subtitle) = match self.screen {
            Screen::Countries => {
                let title = match self.countries.ready() {
                    Some(_) => format!(" Countries ({}) ", self.filtered_countries.len()),
                    None => " Countries ".to_string(),
                };
                (title, None)
            }
            Screen::CountryDetails => {
                let name = self
                    .details
                    .as_ref()
                    .map_or("Country", |details| details.country.name.as_str());
                let days = self
                    .details
                    .as_ref()
                    .and_then(|details| details.report.ready().copied().flatten())
                    .map(|report| format!("{} days reported", report.days));
                (format!(" {name} "), days)
            }
            Screen::Global => (" Global Summary ".to_string(), self.as_of()),
            Screen::Regions => (" Regional Statistics ".to_string(), self.as_of()),
        };

        HeaderInfo { title, subtitle }
    }

    fn as_of(&self) -> Option<String> {
        self.summary
            .ready()
            .and_then(|snapshot| snapshot.as_of)
            .map(|date| format!("as of {}", date.format("%Y-%m-%d")))
    }

    fn compute_tabs(&self) -> Option<TabsInfo> {
        (self.screen == Screen::Regions).then(|| TabsInfo {
            labels: Region::ALL.iter().map(|r| r.label().to_string()).collect(),
            active: Region::ALL.iter().position(|r| *r == self.region).unwrap_or(0),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.input_mode) {
            (Screen::Countries, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Tab: results  Enter: details  Ctrl+n/p: navigate  Type to filter by slug"
            }
            (Screen::Countries, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: details"
            }
            (Screen::Countries, InputMode::Normal) => {
                "j/k: navigate  /: search  Enter: details  Tab: next screen  r: refresh  q: quit"
            }
            (Screen::CountryDetails, _) => "Esc/Backspace: back  Tab: next screen  r: refresh  q: quit",
            (Screen::Global, _) => "1/2/3 or Tab: switch screen  r: refresh  q: quit",
            (Screen::Regions, _) => "h/l: region  j/k: navigate  Enter: details  Tab: next screen  r: refresh  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) if self.screen == Screen::Countries => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            _ => None,
        }
    }

    /// Rows left for table rows after the chrome of the current screen.
    const fn available_rows(&self, total_rows: usize) -> usize {
        let mut chrome = CHROME_ROWS;
        if matches!((self.screen, self.input_mode), (Screen::Countries, InputMode::Search(_))) {
            chrome += SEARCH_ROWS;
        }
        if matches!(self.screen, Screen::Regions) {
            chrome += TAB_ROWS;
        }
        total_rows.saturating_sub(chrome)
    }
}

/// Match range of `query` in `full`, cut to the characters that survive in
/// its truncated form `shown`. The `...` marker is never highlighted.
fn visible_match(full: &str, shown: &str, query: &str) -> Option<(usize, usize)> {
    let (start, end) = match_range(full, query)?;
    let shown_len = shown.chars().count();
    let kept = if shown != full && shown.ends_with("...") {
        shown_len - 3
    } else {
        shown_len
    };
    let end = end.min(kept);
    (start < end).then_some((start, end))
}

/// Window `[start, end)` of at most `available` items keeping `selected`
/// near the middle.
fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let available = available.max(1);
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);

    if end - start < available && len >= available {
        start = end.saturating_sub(available);
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayOneRecord, GlobalTotals, ReferenceEntry};
    use chrono::NaiveDate;

    fn granted_state(screen: Screen) -> AppState {
        let reference = ReferenceTable::from_entries(vec![
            ReferenceEntry::new("Germany", "Europe"),
            ReferenceEntry::new("France", "Europe"),
            ReferenceEntry::new("Canada", "North America"),
        ]);
        let mut state = AppState::new(reference, Theme::default(), "http://api.test/", screen);
        state.permission = Permission::Granted;
        state
    }

    fn countries() -> Vec<Country> {
        vec![
            Country::new("Austria", "austria", "AT"),
            Country::new("Australia", "australia", "AU"),
            Country::new("France", "france", "FR"),
        ]
    }

    fn summary() -> SummarySnapshot {
        let mut germany = CountrySummary::named("Germany");
        germany.slug = "germany".into();
        germany.total_confirmed = 1_500;
        SummarySnapshot {
            global: GlobalTotals {
                total_confirmed: 2_000_000,
                ..GlobalTotals::default()
            },
            countries: vec![
                germany,
                CountrySummary::named("Canada"),
                CountrySummary::named("France"),
                CountrySummary::named("Narnia"),
            ],
            as_of: NaiveDate::from_ymd_opt(2022, 3, 7),
        }
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        assert_eq!(granted_state(Screen::Countries).base_url, "http://api.test");
    }

    #[test]
    fn request_is_deferred_without_permission() {
        let mut state = granted_state(Screen::Countries);
        state.permission = Permission::Pending;

        assert_eq!(state.request(Endpoint::Countries), None);
        assert!(state.countries.is_idle());
    }

    #[test]
    fn request_marks_loading() {
        let mut state = granted_state(Screen::Countries);
        assert_eq!(state.request(Endpoint::Countries), Some(Action::Fetch(Endpoint::Countries)));
        assert!(state.countries.is_loading());
    }

    #[test]
    fn countries_payload_is_sorted_and_filtered() {
        let mut state = granted_state(Screen::Countries);
        state.apply_payload(Payload::Countries(countries()));

        let names: Vec<_> = state.filtered_countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Australia", "Austria", "France"]);

        state.search_query = "aus".into();
        state.apply_search_filter();
        assert_eq!(state.filtered_countries.len(), 2);
    }

    #[test]
    fn search_always_filters_the_full_list() {
        let mut state = granted_state(Screen::Countries);
        state.apply_payload(Payload::Countries(countries()));

        state.search_query = "fra".into();
        state.apply_search_filter();
        state.search_query = "a".into();
        state.apply_search_filter();

        assert_eq!(state.filtered_countries.len(), 3);
    }

    #[test]
    fn region_countries_follow_the_active_tab() {
        let mut state = granted_state(Screen::Regions);
        state.apply_payload(Payload::Summary(summary()));

        let europe: Vec<_> = state.region_countries().iter().map(|c| c.country.as_str()).collect();
        assert_eq!(europe, vec!["Germany", "France"]);

        state.cycle_region(true);
        let americas: Vec<_> = state.region_countries().iter().map(|c| c.country.as_str()).collect();
        assert_eq!(americas, vec!["Canada"]);
    }

    #[test]
    fn selection_wraps_within_region_tab() {
        let mut state = granted_state(Screen::Regions);
        state.apply_payload(Payload::Summary(summary()));

        state.move_selection_up();
        assert_eq!(state.region_index, 1);
        state.move_selection_down();
        assert_eq!(state.region_index, 0);
    }

    #[test]
    fn stale_day_one_payload_is_ignored() {
        let mut state = granted_state(Screen::Countries);
        state.apply_payload(Payload::Countries(countries()));
        state.open_selected();

        state.apply_payload(Payload::DayOne {
            slug: "france".into(),
            series: vec![],
        });

        let details = state.details.as_ref().unwrap();
        assert_eq!(details.country.slug, "australia");
        assert!(details.report.is_idle());
    }

    #[test]
    fn details_view_shows_first_and_latest_day() {
        let mut state = granted_state(Screen::Countries);
        state.apply_payload(Payload::Countries(countries()));
        state.open_selected();

        let day = |d, confirmed, active| DayOneRecord {
            date: NaiveDate::from_ymd_opt(2020, 1, d).unwrap(),
            confirmed,
            active,
            recovered: 1,
            deaths: 2,
        };
        state.apply_payload(Payload::DayOne {
            slug: "australia".into(),
            series: vec![day(25, 4, 4), day(26, 5_000, 4_200)],
        });

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Australia ");
        assert_eq!(vm.header.subtitle.as_deref(), Some("2 days reported"));
        let Body::Stats(sections) = vm.body else {
            panic!("expected stats body");
        };
        assert_eq!(sections[0].lines[0].value, "2020-01-25");
        assert_eq!(sections[0].lines[1].value, "4");
        assert_eq!(sections[1].lines[0].value, "5,000");
        assert_eq!(sections[1].lines[1].value, "4,200");
    }

    #[test]
    fn empty_day_one_series_has_its_own_message() {
        let mut state = granted_state(Screen::Countries);
        state.apply_payload(Payload::Countries(countries()));
        state.open_selected();
        state.apply_payload(Payload::DayOne {
            slug: "australia".into(),
            series: vec![],
        });

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Empty(ref e) if e.message == "No day one data"));
    }

    #[test]
    fn search_highlights_slug_match() {
        let mut state = granted_state(Screen::Countries);
        state.apply_payload(Payload::Countries(countries()));
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.search_query = "STRAL".into();
        state.apply_search_filter();

        let vm = state.compute_viewmodel(24, 80);
        let Body::Countries(rows) = vm.body else {
            panic!("expected country rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].highlight_ranges, vec![(2, 7)]);
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn highlight_stops_at_truncated_slug() {
        let mut state = granted_state(Screen::Countries);
        state.apply_payload(Payload::Countries(vec![Country::new(
            "Saint Vincent and the Grenadines",
            "saint-vincent-and-the-grenadines",
            "VC",
        )]));
        state.input_mode = InputMode::Search(SearchFocus::Typing);

        let highlights = |state: &mut AppState, query: &str| {
            state.search_query = query.into();
            state.apply_search_filter();
            match state.compute_viewmodel(24, 30).body {
                Body::Countries(rows) => (rows[0].slug.clone(), rows[0].highlight_ranges.clone()),
                _ => panic!("expected country rows"),
            }
        };

        let (slug, ranges) = highlights(&mut state, "vincent");
        assert_eq!(slug, "saint-vincen...");
        assert_eq!(ranges, vec![(6, 12)]);

        let (_, ranges) = highlights(&mut state, "grenadines");
        assert!(ranges.is_empty());

        let (_, ranges) = highlights(&mut state, "saint");
        assert_eq!(ranges, vec![(0, 5)]);
    }

    #[test]
    fn search_rows_are_reserved_only_on_the_country_list() {
        let mut state = granted_state(Screen::Countries);
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        assert_eq!(state.available_rows(24), 24 - CHROME_ROWS - SEARCH_ROWS);

        state.screen = Screen::CountryDetails;
        assert_eq!(state.available_rows(24), 24 - CHROME_ROWS);

        state.screen = Screen::Regions;
        state.input_mode = InputMode::Normal;
        assert_eq!(state.available_rows(24), 24 - CHROME_ROWS - TAB_ROWS);
    }

    #[test]
    fn loading_and_failure_are_visible() {
        let mut state = granted_state(Screen::Global);
        state.request(Endpoint::Summary);
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Empty(ref e) if e.message == "Loading..."));

        state.apply_failure(&Endpoint::Summary, "HTTP 503 from http://api.test/summary".into());
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Empty(ref e) if e.subtitle.starts_with("HTTP 503")));
    }

    #[test]
    fn global_view_formats_totals() {
        let mut state = granted_state(Screen::Global);
        state.apply_payload(Payload::Summary(summary()));

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.subtitle.as_deref(), Some("as of 2022-03-07"));
        let Body::Stats(sections) = vm.body else {
            panic!("expected stats body");
        };
        assert_eq!(sections[0].lines[1].value, "2,000,000");
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(visible_window(0, 100, 10), (0, 10));
        assert_eq!(visible_window(50, 100, 10), (45, 55));
        assert_eq!(visible_window(99, 100, 10), (90, 100));
        assert_eq!(visible_window(2, 3, 10), (0, 3));
    }
}

//! Statistics records decoded from the remote API.
//!
//! These are pass-through values: the plugin displays them and the region
//! classifier filters them, but nothing here mutates them after decoding.

use chrono::NaiveDate;

/// Per-country snapshot from the summary endpoint.
///
/// Counts are signed because the upstream occasionally publishes negative daily
/// corrections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountrySummary {
    pub country: String,
    pub country_code: String,
    pub slug: String,
    pub new_confirmed: i64,
    pub total_confirmed: i64,
    pub new_deaths: i64,
    pub total_deaths: i64,
    pub new_recovered: i64,
    pub total_recovered: i64,
}

impl CountrySummary {
    /// Creates a summary with only the country name set and all counts zeroed.
    ///
    /// Mostly useful for building fixtures.
    #[must_use]
    pub fn named(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}

/// Aggregated worldwide counts from the summary endpoint's `Global` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalTotals {
    pub new_confirmed: i64,
    pub total_confirmed: i64,
    pub new_deaths: i64,
    pub total_deaths: i64,
    pub new_recovered: i64,
    pub total_recovered: i64,
}

/// One decoded response of the summary endpoint.
///
/// Shared by the Global and Regional screens so the summary is fetched once
/// and reused until the user asks for a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummarySnapshot {
    pub global: GlobalTotals,
    pub countries: Vec<CountrySummary>,
    /// Upstream timestamp of the snapshot, date part only.
    pub as_of: Option<NaiveDate>,
}

/// One day of a country's day-one time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOneRecord {
    pub date: NaiveDate,
    pub confirmed: i64,
    pub active: i64,
    pub recovered: i64,
    pub deaths: i64,
}

/// The two ends of a day-one series, as shown on the country details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOneReport {
    /// The first record: the date of the first confirmed case.
    pub first: DayOneRecord,
    /// The last record: the current totals.
    pub latest: DayOneRecord,
    /// Number of records in the series.
    pub days: usize,
}

impl DayOneReport {
    /// Summarizes a day-one series.
    ///
    /// Returns `None` for an empty series; some countries have no reported
    /// cases and the endpoint answers with `[]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use zcovid::domain::{DayOneRecord, DayOneReport};
    ///
    /// let day = |d, confirmed| DayOneRecord {
    ///     date: NaiveDate::from_ymd_opt(2020, 3, d).unwrap(),
    ///     confirmed,
    ///     active: confirmed,
    ///     recovered: 0,
    ///     deaths: 0,
    /// };
    ///
    /// let report = DayOneReport::from_series(&[day(1, 2), day(2, 9)]).unwrap();
    /// assert_eq!(report.first.confirmed, 2);
    /// assert_eq!(report.latest.confirmed, 9);
    /// assert!(DayOneReport::from_series(&[]).is_none());
    /// ```
    #[must_use]
    pub fn from_series(series: &[DayOneRecord]) -> Option<Self> {
        let first = *series.first()?;
        let latest = *series.last()?;
        Some(Self {
            first,
            latest,
            days: series.len(),
        })
    }
}

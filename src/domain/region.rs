//! Country-to-continent reference table and region classification.
//!
//! The reference table is a static list of `{country, continent}` pairs that is
//! loaded once at startup and then only read. It is constructed explicitly and
//! handed to the application state; there is no global instance.
//!
//! Classification joins summary records against the table by exact country
//! name. Records whose name is not in the table are dropped without error:
//! an unmatched country must not stop the rest of the list from rendering.

use crate::domain::error::{Result, ZcovidError};
use crate::domain::stats::CountrySummary;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// The bundled reference table, embedded at compile time.
const BUNDLED_REFERENCE: &str = include_str!("../../data/countries.json");

/// The fixed set of regions shown as tabs on the regional statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Europe,
    NorthAmerica,
    SouthAmerica,
    Asia,
    Africa,
    Oceania,
}

impl Region {
    /// All regions in tab order.
    pub const ALL: [Self; 6] = [
        Self::Europe,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Asia,
        Self::Africa,
        Self::Oceania,
    ];

    /// The continent label as it appears in the reference table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::Oceania => "Oceania",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// The next tab, wrapping from the last region to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The previous tab, wrapping from the first region to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Country name, spelled exactly as the summary endpoint spells it.
    #[serde(rename = "country")]
    pub country_name: String,

    /// Continent label, e.g. `"North America"`.
    pub continent: String,
}

impl ReferenceEntry {
    #[must_use]
    pub fn new(country_name: impl Into<String>, continent: impl Into<String>) -> Self {
        Self {
            country_name: country_name.into(),
            continent: continent.into(),
        }
    }
}

/// Read-only country-to-continent mapping.
///
/// Entries keep their file order. Lookups go through a name index that records
/// the first entry for each name, so duplicate names resolve first-match-wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
    by_name: HashMap<String, usize>,
}

impl ReferenceTable {
    /// Builds a table from entries in their given order.
    #[must_use]
    pub fn from_entries(entries: Vec<ReferenceEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            by_name.entry(entry.country_name.clone()).or_insert(idx);
        }

        tracing::debug!(
            entry_count = entries.len(),
            unique_names = by_name.len(),
            "reference table built"
        );

        Self { entries, by_name }
    }

    /// Parses a table from a JSON array of `{"country", "continent"}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`ZcovidError::Reference`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ReferenceEntry> = serde_json::from_str(json)
            .map_err(|e| ZcovidError::Reference(format!("failed to parse reference JSON: {e}")))?;
        Ok(Self::from_entries(entries))
    }

    /// Loads a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Loads the table bundled with the plugin.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded file is malformed.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_REFERENCE)
    }

    /// The continent recorded for a country name, if any.
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn continent_of(&self, country_name: &str) -> Option<&str> {
        self.by_name
            .get(country_name)
            .map(|&idx| self.entries[idx].continent.as_str())
    }

    /// Returns the summaries whose country is classified into `region`.
    ///
    /// Input order is preserved. Summaries with no reference entry, or whose
    /// entry names another continent, are left out. An unknown region label
    /// yields an empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcovid::domain::{CountrySummary, ReferenceEntry, ReferenceTable};
    ///
    /// let table = ReferenceTable::from_entries(vec![
    ///     ReferenceEntry::new("Germany", "Europe"),
    ///     ReferenceEntry::new("Canada", "North America"),
    /// ]);
    /// let summaries = vec![
    ///     CountrySummary::named("Germany"),
    ///     CountrySummary::named("Canada"),
    ///     CountrySummary::named("Narnia"),
    /// ];
    ///
    /// let europe = table.classify_by_region("Europe", &summaries);
    /// assert_eq!(europe.len(), 1);
    /// assert_eq!(europe[0].country, "Germany");
    /// assert!(table.classify_by_region("Africa", &summaries).is_empty());
    /// ```
    #[must_use]
    pub fn classify_by_region<'a>(
        &self,
        region: &str,
        summaries: &'a [CountrySummary],
    ) -> Vec<&'a CountrySummary> {
        summaries
            .iter()
            .filter(|summary| self.continent_of(&summary.country) == Some(region))
            .collect()
    }

    /// Names of summaries that have no entry in the table.
    ///
    /// These are the records every region silently drops; the handler logs
    /// them so naming mismatches can be spotted in traces.
    #[must_use]
    pub fn unmatched<'a>(&self, summaries: &'a [CountrySummary]) -> Vec<&'a str> {
        summaries
            .iter()
            .filter(|summary| !self.by_name.contains_key(&summary.country))
            .map(|summary| summary.country.as_str())
            .collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Domain layer for the zcovid plugin.
//!
//! Core types and the two pure operations of the plugin, region classification
//! and substring search, independent of Zellij APIs and of HTTP.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`country`]: Country listing model
//! - [`stats`]: Summary and day-one statistics records
//! - [`region`]: Reference table and region classification
//! - [`search`]: Case-insensitive substring search

pub mod country;
pub mod error;
pub mod region;
pub mod search;
pub mod stats;

pub use country::{sort_by_name, Country};
pub use error::{Result, ZcovidError};
pub use region::{ReferenceEntry, ReferenceTable, Region};
pub use search::{filter_by_substring, match_range, SubstringFilter};
pub use stats::{CountrySummary, DayOneRecord, DayOneReport, GlobalTotals, SummarySnapshot};

//! Wire format of the statistics API and its translation into domain types.
//!
//! The upstream service uses PascalCase JSON keys and RFC 3339 timestamps. The
//! structs here mirror that format and stay private to this module; callers only
//! see the domain types returned by the `decode_*` functions.

use crate::domain::error::{Result, ZcovidError};
use crate::domain::{Country, CountrySummary, DayOneRecord, GlobalTotals, SummarySnapshot};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireCountry {
    country: String,
    slug: String,
    #[serde(rename = "ISO2", default)]
    iso2: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireDayOne {
    date: String,
    #[serde(default)]
    confirmed: i64,
    #[serde(default)]
    active: i64,
    #[serde(default)]
    recovered: i64,
    #[serde(default)]
    deaths: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct WireTotals {
    new_confirmed: i64,
    total_confirmed: i64,
    new_deaths: i64,
    total_deaths: i64,
    new_recovered: i64,
    total_recovered: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireCountrySummary {
    country: String,
    #[serde(default)]
    country_code: String,
    #[serde(default)]
    slug: String,
    #[serde(flatten)]
    totals: WireTotals,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireSummary {
    #[serde(default)]
    message: String,
    global: Option<WireTotals>,
    #[serde(default)]
    countries: Vec<WireCountrySummary>,
    date: Option<String>,
}

impl From<WireTotals> for GlobalTotals {
    fn from(wire: WireTotals) -> Self {
        Self {
            new_confirmed: wire.new_confirmed,
            total_confirmed: wire.total_confirmed,
            new_deaths: wire.new_deaths,
            total_deaths: wire.total_deaths,
            new_recovered: wire.new_recovered,
            total_recovered: wire.total_recovered,
        }
    }
}

impl From<WireCountrySummary> for CountrySummary {
    fn from(wire: WireCountrySummary) -> Self {
        let totals = GlobalTotals::from(wire.totals);
        Self {
            country: wire.country,
            country_code: wire.country_code,
            slug: wire.slug,
            new_confirmed: totals.new_confirmed,
            total_confirmed: totals.total_confirmed,
            new_deaths: totals.new_deaths,
            total_deaths: totals.total_deaths,
            new_recovered: totals.new_recovered,
            total_recovered: totals.total_recovered,
        }
    }
}

/// Parses the date part of an upstream timestamp.
///
/// Accepts full RFC 3339 (`2020-01-27T00:00:00Z`, with or without fractional
/// seconds) and falls back to the leading `YYYY-MM-DD`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .ok()
        .or_else(|| {
            let day = raw.split('T').next()?;
            NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d").ok()
        })
}

fn decode_error(what: &str, err: &serde_json::Error) -> ZcovidError {
    ZcovidError::Decode(format!("{what}: {err}"))
}

/// Decodes a `/countries` response body.
///
/// # Errors
///
/// Returns [`ZcovidError::Decode`] if the body is not a JSON array of countries.
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>> {
    let wire: Vec<WireCountry> =
        serde_json::from_slice(body).map_err(|e| decode_error("countries", &e))?;

    Ok(wire
        .into_iter()
        .map(|c| Country::new(c.country, c.slug, c.iso2))
        .collect())
}

/// Decodes a `/dayone/country/{slug}` response body, oldest record first.
///
/// # Errors
///
/// Returns [`ZcovidError::Decode`] if the body is malformed or any record
/// carries an unparseable date.
pub fn decode_day_one(body: &[u8]) -> Result<Vec<DayOneRecord>> {
    let wire: Vec<WireDayOne> =
        serde_json::from_slice(body).map_err(|e| decode_error("day one series", &e))?;

    let mut records = wire
        .into_iter()
        .map(|day| {
            let date = parse_date(&day.date)
                .ok_or_else(|| ZcovidError::Decode(format!("invalid date '{}'", day.date)))?;
            Ok(DayOneRecord {
                date,
                confirmed: day.confirmed,
                active: day.active,
                recovered: day.recovered,
                deaths: day.deaths,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Upstream is chronological already; provinces can interleave though.
    records.sort_by_key(|record| record.date);
    Ok(records)
}

/// Decodes a `/summary` response body.
///
/// # Errors
///
/// Returns [`ZcovidError::Decode`] if the body is malformed, or if the service
/// answered with a status message (e.g. `"Caching in progress"`) instead of
/// data.
pub fn decode_summary(body: &[u8]) -> Result<SummarySnapshot> {
    let wire: WireSummary =
        serde_json::from_slice(body).map_err(|e| decode_error("summary", &e))?;

    let Some(global) = wire.global else {
        let reason = if wire.message.is_empty() {
            "summary has no Global block".to_string()
        } else {
            wire.message
        };
        return Err(ZcovidError::Decode(reason));
    };

    Ok(SummarySnapshot {
        global: global.into(),
        countries: wire.countries.into_iter().map(CountrySummary::from).collect(),
        as_of: wire.date.as_deref().and_then(parse_date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn countries_keep_upstream_spelling() {
        let body = br#"[
            {"Country": "Korea (South)", "Slug": "korea-south", "ISO2": "KR"},
            {"Country": "Viet Nam", "Slug": "vietnam", "ISO2": "VN"}
        ]"#;

        let countries = decode_countries(body).unwrap();
        assert_eq!(countries[0], Country::new("Korea (South)", "korea-south", "KR"));
        assert_eq!(countries[1].slug, "vietnam");
    }

    #[test]
    fn countries_tolerate_missing_iso2() {
        let countries = decode_countries(br#"[{"Country": "Kosovo", "Slug": "kosovo"}]"#).unwrap();
        assert_eq!(countries[0].iso2, "");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_countries(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ZcovidError::Decode(_)));
    }

    #[test]
    fn day_one_series_is_sorted_by_date() {
        let body = br#"[
            {"Country": "France", "Date": "2020-01-25T00:00:00Z", "Confirmed": 3, "Active": 3, "Recovered": 0, "Deaths": 0},
            {"Country": "France", "Date": "2020-01-24T00:00:00Z", "Confirmed": 2, "Active": 2, "Recovered": 0, "Deaths": 0}
        ]"#;

        let series = decode_day_one(body).unwrap();
        assert_eq!(series[0].date, ymd(2020, 1, 24));
        assert_eq!(series[0].confirmed, 2);
        assert_eq!(series[1].date, ymd(2020, 1, 25));
    }

    #[test]
    fn empty_day_one_series_is_valid() {
        assert!(decode_day_one(b"[]").unwrap().is_empty());
    }

    #[test]
    fn day_one_rejects_garbage_dates() {
        let err = decode_day_one(br#"[{"Date": "yesterday"}]"#).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn summary_decodes_global_and_countries() {
        let body = br#"{
            "ID": "abc",
            "Message": "",
            "Global": {
                "NewConfirmed": 100, "TotalConfirmed": 5000,
                "NewDeaths": 4, "TotalDeaths": 120,
                "NewRecovered": 30, "TotalRecovered": 2000,
                "Date": "2022-03-07T09:05:12.398Z"
            },
            "Countries": [{
                "ID": "x", "Country": "Germany", "CountryCode": "DE", "Slug": "germany",
                "NewConfirmed": 10, "TotalConfirmed": 700,
                "NewDeaths": -1, "TotalDeaths": 20,
                "NewRecovered": 0, "TotalRecovered": 0,
                "Date": "2022-03-07T09:05:12.398Z", "Premium": {}
            }],
            "Date": "2022-03-07T09:05:12.398Z"
        }"#;

        let summary = decode_summary(body).unwrap();
        assert_eq!(summary.global.total_confirmed, 5000);
        assert_eq!(summary.global.total_recovered, 2000);
        assert_eq!(summary.countries.len(), 1);
        assert_eq!(summary.countries[0].country_code, "DE");
        assert_eq!(summary.countries[0].new_deaths, -1);
        assert_eq!(summary.as_of, Some(ymd(2022, 3, 7)));
    }

    #[test]
    fn caching_message_surfaces_as_error() {
        let err = decode_summary(br#"{"Message": "Caching in progress"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Decode error: Caching in progress");
    }

    #[test]
    fn parse_date_falls_back_to_day_part() {
        assert_eq!(parse_date("2021-06-01T00:00:00"), Some(ymd(2021, 6, 1)));
        assert_eq!(parse_date("2021-06-01"), Some(ymd(2021, 6, 1)));
        assert_eq!(parse_date(""), None);
    }
}

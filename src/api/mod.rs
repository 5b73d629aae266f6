//! Client side of the covid19api REST service.
//!
//! The plugin never performs I/O itself. The app layer emits
//! [`Action::Fetch`](crate::app::Action::Fetch) with an [`Endpoint`], the plugin
//! shim turns it into a Zellij web request, and the response comes back as an
//! event which is decoded here into a [`Payload`].
//!
//! # Organization
//!
//! - [`endpoint`]: Endpoint paths, request headers, and request context
//! - [`wire`]: Upstream JSON shapes and decoding into domain types

pub mod endpoint;
pub mod wire;

pub use endpoint::{request_headers, Endpoint, DEFAULT_BASE_URL};

use crate::domain::error::{Result, ZcovidError};
use crate::domain::{Country, DayOneRecord, SummarySnapshot};

/// A decoded response body, tagged by the endpoint it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Countries(Vec<Country>),
    DayOne { slug: String, series: Vec<DayOneRecord> },
    Summary(SummarySnapshot),
}

/// Checks the status of a finished request and decodes its body.
///
/// # Errors
///
/// - [`ZcovidError::Http`] for any status outside `200..300`
/// - [`ZcovidError::Decode`] if the body does not match the endpoint's shape
///
/// # Examples
///
/// ```
/// use zcovid::api::{decode_response, Endpoint, Payload};
///
/// let body = br#"[{"Country": "France", "Slug": "france", "ISO2": "FR"}]"#;
/// let payload = decode_response(&Endpoint::Countries, 200, body, "https://example.org").unwrap();
/// assert!(matches!(payload, Payload::Countries(list) if list.len() == 1));
///
/// let err = decode_response(&Endpoint::Summary, 429, b"", "https://example.org").unwrap_err();
/// assert_eq!(err.to_string(), "HTTP 429 from https://example.org/summary");
/// ```
pub fn decode_response(
    endpoint: &Endpoint,
    status: u16,
    body: &[u8],
    base_url: &str,
) -> Result<Payload> {
    if !(200..300).contains(&status) {
        return Err(ZcovidError::Http {
            status,
            url: endpoint.url(base_url),
        });
    }

    match endpoint {
        Endpoint::Countries => wire::decode_countries(body).map(Payload::Countries),
        Endpoint::DayOne { slug } => wire::decode_day_one(body).map(|series| Payload::DayOne {
            slug: slug.clone(),
            series,
        }),
        Endpoint::Summary => wire::decode_summary(body).map(Payload::Summary),
    }
}

//! REST endpoints of the statistics API and request bookkeeping.
//!
//! Zellij web requests are fire-and-forget: the host answers later with a
//! `WebRequestResult` event carrying the context map that was attached to the
//! request. Each [`Endpoint`] therefore knows how to encode itself into that
//! context and how to recover itself from it.

use std::collections::BTreeMap;

/// Default API root used when the configuration does not override it.
pub const DEFAULT_BASE_URL: &str = "https://api.covid19api.com";

const CONTEXT_ENDPOINT: &str = "endpoint";
const CONTEXT_SLUG: &str = "slug";

/// One of the three read-only endpoints the plugin consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// All countries with name and slug.
    Countries,
    /// The day-one time series of a single country.
    DayOne {
        /// Slug of the country, as listed by [`Endpoint::Countries`].
        slug: String,
    },
    /// Global and per-country summary snapshot.
    Summary,
}

impl Endpoint {
    /// Path of the endpoint relative to the API root.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Countries => "/countries".to_string(),
            Self::DayOne { slug } => format!("/dayone/country/{slug}"),
            Self::Summary => "/summary".to_string(),
        }
    }

    /// Absolute URL of the endpoint under `base_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcovid::api::Endpoint;
    ///
    /// let endpoint = Endpoint::DayOne { slug: "south-africa".into() };
    /// assert_eq!(
    ///     endpoint.url("https://api.covid19api.com/"),
    ///     "https://api.covid19api.com/dayone/country/south-africa"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Short name used in logs and in the request context.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Countries => "countries",
            Self::DayOne { .. } => "dayone",
            Self::Summary => "summary",
        }
    }

    /// Encodes the endpoint into a web request context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_ENDPOINT.to_string(), self.name().to_string());
        if let Self::DayOne { slug } = self {
            context.insert(CONTEXT_SLUG.to_string(), slug.clone());
        }
        context
    }

    /// Recovers the endpoint from a web request context map.
    ///
    /// Returns `None` for contexts this plugin did not produce.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(CONTEXT_ENDPOINT)?.as_str() {
            "countries" => Some(Self::Countries),
            "summary" => Some(Self::Summary),
            "dayone" => context
                .get(CONTEXT_SLUG)
                .map(|slug| Self::DayOne { slug: slug.clone() }),
            _ => None,
        }
    }
}

/// Headers sent with every request.
#[must_use]
pub fn request_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_round_trips_every_endpoint() {
        let endpoints = [
            Endpoint::Countries,
            Endpoint::Summary,
            Endpoint::DayOne { slug: "germany".into() },
        ];

        for endpoint in endpoints {
            assert_eq!(Endpoint::from_context(&endpoint.to_context()), Some(endpoint));
        }
    }

    #[test]
    fn foreign_context_is_ignored() {
        let mut context = BTreeMap::new();
        assert_eq!(Endpoint::from_context(&context), None);

        context.insert("endpoint".into(), "dayone".into());
        assert_eq!(Endpoint::from_context(&context), None, "dayone without slug");

        context.insert("endpoint".into(), "vaccines".into());
        assert_eq!(Endpoint::from_context(&context), None);
    }

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(Endpoint::Summary.url("http://localhost:8080"), "http://localhost:8080/summary");
        assert_eq!(Endpoint::Countries.url("http://localhost:8080/"), "http://localhost:8080/countries");
    }
}

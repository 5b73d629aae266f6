//! Error types for the zcovid plugin.
//!
//! This module defines the centralized error type [`ZcovidError`] and a type alias
//! [`Result`] used throughout the plugin. Errors only arise at the edges: HTTP
//! responses, payload decoding, and configuration-supplied files. The
//! classification and search operations themselves are total.

use thiserror::Error;

/// The main error type for zcovid plugin operations.
///
/// # Examples
///
/// ```
/// use zcovid::ZcovidError;
///
/// let err = ZcovidError::Http { status: 503, url: "https://api.covid19api.com/summary".into() };
/// assert_eq!(err.to_string(), "HTTP 503 from https://api.covid19api.com/summary");
/// ```
#[derive(Debug, Error)]
pub enum ZcovidError {
    /// The API answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Status code returned by the host's web request.
        status: u16,
        /// Fully qualified request URL.
        url: String,
    },

    /// A response body could not be decoded into the expected shape.
    ///
    /// The string carries the decoder message, including the offending endpoint.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The country-to-continent reference table could not be loaded.
    #[error("Reference table error: {0}")]
    Reference(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zcovid operations.
pub type Result<T> = std::result::Result<T, ZcovidError>;

//! Geocode client error types.

/// Errors from Nominatim lookups.
///
/// "No match found" is deliberately NOT an error — [`crate::GeocodeClient::lookup`]
/// returns `Ok(None)` for it, and the fallback path substitutes a fixed
/// coordinate.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP transport error after retries were exhausted.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The endpoint path being called.
        endpoint: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// Nominatim returned a non-2xx status.
    #[error("geocoder {endpoint} returned {status}: {body}")]
    Api {
        /// The endpoint path being called.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape, or carried
    /// coordinates that do not parse as numbers.
    #[error("malformed geocoder response from {endpoint}: {detail}")]
    MalformedResponse {
        /// The endpoint path being called.
        endpoint: String,
        /// What was wrong with the body.
        detail: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

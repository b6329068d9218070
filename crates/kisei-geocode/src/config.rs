//! Geocode client configuration.
//!
//! Base URL, user agent, and timeout for the Nominatim service. Defaults
//! point to the public OpenStreetMap instance; override via environment
//! variables for a self-hosted mirror or tests.

use url::Url;

/// Configuration for the Nominatim geocoding service.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL of the Nominatim instance.
    /// Default: <https://nominatim.openstreetmap.org>
    pub base_url: Url,
    /// User-Agent header. Nominatim's usage policy requires an identifying
    /// agent string.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `KISEI_NOMINATIM_URL` (default: `https://nominatim.openstreetmap.org`)
    /// - `KISEI_GEOCODE_USER_AGENT` (default: `kisei-buildcheck/0.1`)
    /// - `KISEI_GEOCODE_TIMEOUT_SECS` (default: 10)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL variable is set but
    /// unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("KISEI_NOMINATIM_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string());
        let base_url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidUrl("KISEI_NOMINATIM_URL".to_string(), e.to_string()))?;

        Ok(Self {
            base_url,
            user_agent: std::env::var("KISEI_GEOCODE_USER_AGENT")
                .unwrap_or_else(|_| "kisei-buildcheck/0.1".to_string()),
            timeout_secs: std::env::var("KISEI_GEOCODE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Point the client at an arbitrary base URL with a short timeout
    /// (used by tests against a local mock server).
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            user_agent: "kisei-buildcheck/0.1 (test)".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL environment variable was set but did not parse.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_base_url_keeps_the_given_url() {
        let url = Url::parse("http://127.0.0.1:9000").unwrap();
        let config = GeocodeConfig::for_base_url(url.clone());
        assert_eq!(config.base_url, url);
        assert_eq!(config.timeout_secs, 5);
    }
}

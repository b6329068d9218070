#![deny(missing_docs)]

//! # kisei-geocode — Nominatim Client for Address Display
//!
//! Resolves a free-text address to a map coordinate via the Nominatim
//! search API. Strictly display-only: the compliance calculation in
//! `kisei-zoning` never sees a coordinate, and a failed or empty lookup
//! degrades to the fixed Hōfu City Hall fallback instead of an error.
//!
//! ## Wire Format
//!
//! `GET {base}/search?q={query}&format=json&limit=1` returns a JSON array
//! of places. Nominatim serializes `lat`/`lon` as *strings*; parsing them
//! into numbers is this crate's job, and a body that does not parse is a
//! [`GeocodeError::MalformedResponse`], not a panic.

pub mod config;
pub mod error;

pub use config::GeocodeConfig;
pub use error::GeocodeError;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Search endpoint path, relative to the configured base URL.
const SEARCH_PATH: &str = "search";

/// Retries after the initial request, for transport failures only.
const TRANSPORT_RETRIES: u32 = 2;

/// Base backoff delay; doubles per attempt (300ms, 600ms).
const RETRY_BASE_DELAY: Duration = Duration::from_millis(300);

/// Hōfu City Hall — the fixed fallback coordinate when geocoding fails
/// or finds no match.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    latitude: 34.0518,
    longitude: 131.5633,
};

/// A WGS84 map coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A successfully geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// The resolved coordinate.
    pub coordinate: Coordinate,
    /// Nominatim's display name for the match, when present.
    pub display_name: Option<String>,
}

/// The display location for an address, after fallback substitution.
///
/// `matched` is `false` when the coordinate is the fixed fallback rather
/// than a real geocoder hit, so the presentation layer can annotate the
/// map pin accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// The coordinate to render.
    pub coordinate: Coordinate,
    /// Display name of the match; `None` for the fallback.
    pub display_name: Option<String>,
    /// Whether the geocoder actually matched the address.
    pub matched: bool,
}

impl ResolvedLocation {
    /// The fixed fallback location (Hōfu City Hall, unmatched).
    pub fn fallback() -> Self {
        Self {
            coordinate: FALLBACK_COORDINATE,
            display_name: None,
            matched: false,
        }
    }
}

/// One place entry as returned by the Nominatim search API.
///
/// Fields use `#[serde(default)]` for resilience against upstream schema
/// evolution; `deny_unknown_fields` is deliberately not used.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Async Nominatim client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    config: GeocodeConfig,
}

impl GeocodeClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodeError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self { http, config })
    }

    /// Create a client from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Config`] for an unparseable URL variable.
    pub fn from_env() -> Result<Self, GeocodeError> {
        Self::new(GeocodeConfig::from_env()?)
    }

    /// Look up an address. `Ok(None)` means the geocoder answered but
    /// found no match.
    ///
    /// ## Retry Policy
    ///
    /// Only transport failures (connection refused, timeout) are retried,
    /// up to two more times with doubling backoff. A non-2xx status is an
    /// answer, not a transient fault: it is returned as
    /// [`GeocodeError::Api`] after a single send, and malformed bodies are
    /// likewise never retried.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] on transport failure (after retries),
    /// non-2xx status, or a malformed body.
    pub async fn lookup(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodeError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GeocodeError::MalformedResponse {
                endpoint: SEARCH_PATH.into(),
                detail: "base URL cannot be a base".into(),
            })?
            .pop_if_empty()
            .push(SEARCH_PATH);
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self.send_with_retry(&url).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                endpoint: SEARCH_PATH.into(),
                status: status.as_u16(),
                body,
            });
        }

        let places: Vec<NominatimPlace> =
            response
                .json()
                .await
                .map_err(|e| GeocodeError::MalformedResponse {
                    endpoint: SEARCH_PATH.into(),
                    detail: e.to_string(),
                })?;

        let Some(place) = places.into_iter().next() else {
            tracing::debug!(query, "geocoder found no match");
            return Ok(None);
        };

        let coordinate = parse_coordinate(&place)?;
        tracing::debug!(
            query,
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "geocoded address"
        );
        Ok(Some(GeocodedPlace {
            coordinate,
            display_name: place.display_name,
        }))
    }

    /// Send the search request, resending on transient transport
    /// failures with doubling backoff. The response is returned whatever
    /// its status; status handling belongs to the caller.
    async fn send_with_retry(&self, url: &url::Url) -> Result<reqwest::Response, GeocodeError> {
        let mut attempt = 0;
        loop {
            match self.http.get(url.clone()).send().await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < TRANSPORT_RETRIES => {
                    let delay = RETRY_BASE_DELAY * 2u32.pow(attempt);
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        "transient geocoder transport failure, retrying in {delay:?}: {e}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    return Err(GeocodeError::Http {
                        endpoint: SEARCH_PATH.into(),
                        source: e,
                    });
                }
            }
        }
    }

    /// Resolve an address to a display location, never failing.
    ///
    /// Lookup errors and no-match results both degrade to
    /// [`ResolvedLocation::fallback`]; the error is logged at `warn` for
    /// operator visibility but does not propagate — a missing map pin must
    /// not block a compliance check.
    pub async fn locate_or_fallback(&self, query: &str) -> ResolvedLocation {
        match self.lookup(query).await {
            Ok(Some(place)) => ResolvedLocation {
                coordinate: place.coordinate,
                display_name: place.display_name,
                matched: true,
            },
            Ok(None) => ResolvedLocation::fallback(),
            Err(e) => {
                tracing::warn!(query, error = %e, "geocoding failed, using fallback coordinate");
                ResolvedLocation::fallback()
            }
        }
    }
}

/// Parse Nominatim's stringly-typed lat/lon pair.
fn parse_coordinate(place: &NominatimPlace) -> Result<Coordinate, GeocodeError> {
    let parse = |name: &str, raw: &str| -> Result<f64, GeocodeError> {
        raw.parse::<f64>()
            .map_err(|_| GeocodeError::MalformedResponse {
                endpoint: SEARCH_PATH.into(),
                detail: format!("{name} is not a number: {raw:?}"),
            })
    };
    Ok(Coordinate {
        latitude: parse("lat", &place.lat)?,
        longitude: parse("lon", &place.lon)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_location_is_city_hall_and_unmatched() {
        let loc = ResolvedLocation::fallback();
        assert_eq!(loc.coordinate, FALLBACK_COORDINATE);
        assert!(!loc.matched);
        assert!(loc.display_name.is_none());
    }

    #[test]
    fn parse_coordinate_accepts_nominatim_strings() {
        let place = NominatimPlace {
            lat: "34.0617".to_string(),
            lon: "131.5667".to_string(),
            display_name: Some("防府市, 山口県".to_string()),
        };
        let c = parse_coordinate(&place).unwrap();
        assert_eq!(c.latitude, 34.0617);
        assert_eq!(c.longitude, 131.5667);
    }

    #[test]
    fn parse_coordinate_rejects_garbage() {
        let place = NominatimPlace {
            lat: "north-ish".to_string(),
            lon: "131.5".to_string(),
            display_name: None,
        };
        let err = parse_coordinate(&place).unwrap_err();
        assert!(matches!(err, GeocodeError::MalformedResponse { .. }));
    }
}

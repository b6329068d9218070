//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The zoning catalog is immutable after construction, so an `Arc` with
//! no lock is sufficient for any number of concurrent handlers. The
//! geocode client is optional: when geocoding is not configured (or its
//! configuration is invalid) the check endpoint simply omits the map
//! location instead of failing.

use std::sync::Arc;

use kisei_geocode::GeocodeClient;
use kisei_zoning::ZoningCatalog;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The Hōfu zoning catalog, built once at startup.
    pub catalog: Arc<ZoningCatalog>,
    /// Optional geocoder for display-only address resolution.
    pub geocoder: Option<GeocodeClient>,
}

impl AppState {
    /// Build state with the Hōfu catalog and an optional geocoder.
    pub fn new(geocoder: Option<GeocodeClient>) -> Self {
        Self {
            catalog: Arc::new(ZoningCatalog::hofu()),
            geocoder,
        }
    }
}

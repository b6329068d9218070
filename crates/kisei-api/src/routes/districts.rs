//! # Districts Route
//!
//! `GET /api/v1/districts` — the catalog in presentation order. Consumed
//! by selection controls; the `name` field is what the check and capacity
//! endpoints accept back as the district identifier.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use kisei_zoning::ZoneRule;

use crate::state::AppState;

/// One district entry in the listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistrictEntry {
    /// Official Japanese name (the lookup identifier).
    pub name: String,
    /// Machine slug, matching the serde form of `UseDistrict`.
    pub slug: String,
    /// Building-coverage limit in percent.
    pub coverage_limit: u16,
    /// Floor-area limit in percent.
    pub floor_area_limit: u16,
}

impl From<&ZoneRule> for DistrictEntry {
    fn from(rule: &ZoneRule) -> Self {
        Self {
            name: rule.district.official_name().to_string(),
            slug: rule.district.slug().to_string(),
            coverage_limit: rule.coverage_limit,
            floor_area_limit: rule.floor_area_limit,
        }
    }
}

/// Routes for this module.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/districts", get(list_districts))
}

/// List all twelve districts with their limits.
async fn list_districts(State(state): State<AppState>) -> Json<Vec<DistrictEntry>> {
    Json(state.catalog.rules().iter().map(DistrictEntry::from).collect())
}

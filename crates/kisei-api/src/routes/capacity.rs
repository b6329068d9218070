//! # Capacity Route
//!
//! `POST /api/v1/capacity` — the "how much could I build" variant of the
//! calculation: given a district, a lot area, and the corner flag, return
//! the lot area plus the maximum footprint and total floor area.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use kisei_zoning::{capacity, BuildableCapacity};

use crate::error::AppError;
use crate::state::AppState;

/// Request body for a capacity computation.
#[derive(Debug, Deserialize)]
pub struct CapacityRequest {
    /// District identifier: official Japanese name or slug.
    pub district: String,
    /// Lot area in square metres.
    pub site_area_sqm: f64,
    /// Corner-lot relaxation flag.
    #[serde(default)]
    pub corner_lot: bool,
}

/// Response body for a capacity computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CapacityResponse {
    /// Official name of the district.
    pub district: String,
    /// Effective coverage limit applied, in percent.
    pub effective_coverage_limit: f64,
    /// Floor-area limit applied, in percent.
    pub floor_area_limit: f64,
    /// The three chart data points.
    pub capacity: BuildableCapacity,
}

/// Routes for this module.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/capacity", post(run_capacity))
}

/// Compute buildable capacity for a lot.
async fn run_capacity(
    State(state): State<AppState>,
    Json(req): Json<CapacityRequest>,
) -> Result<Json<CapacityResponse>, AppError> {
    let rule = *state.catalog.get(&req.district)?;
    let cap = capacity(req.site_area_sqm, req.corner_lot, &rule)?;

    Ok(Json(CapacityResponse {
        district: rule.district.official_name().to_string(),
        effective_coverage_limit: kisei_zoning::corner_adjusted_limit(
            f64::from(rule.coverage_limit),
            req.corner_lot,
        ),
        floor_area_limit: f64::from(rule.floor_area_limit),
        capacity: cap,
    }))
}

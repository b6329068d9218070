//! # Check Route
//!
//! `POST /api/v1/check` — the simulator's main operation. Takes the form
//! inputs (district, lot and building areas, corner flag, optional
//! address), evaluates the plan, and returns the assessment, the
//! buildable capacity for the chart, and — when an address was supplied
//! and a geocoder is configured — the display-only map location.
//!
//! The location never feeds the calculation, and geocoding failure never
//! fails the check (the fallback coordinate is substituted instead).

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use kisei_geocode::ResolvedLocation;
use kisei_zoning::{capacity, evaluate, BuildableCapacity, BuildingPlan, ComplianceAssessment};

use crate::error::AppError;
use crate::state::AppState;

/// Request body for a compliance check.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// District identifier: official Japanese name or slug.
    pub district: String,
    /// Lot area in square metres.
    pub site_area_sqm: f64,
    /// Building footprint in square metres.
    pub building_area_sqm: f64,
    /// Total floor area in square metres.
    pub total_floor_area_sqm: f64,
    /// Corner-lot relaxation flag.
    #[serde(default)]
    pub corner_lot: bool,
    /// Optional address for the map pin (display only).
    #[serde(default)]
    pub address: Option<String>,
}

/// Response body for a compliance check.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Official name of the district the plan was checked against.
    pub district: String,
    /// The computed ratios, limits, and verdict.
    pub assessment: ComplianceAssessment,
    /// The chart's three data points for this lot.
    pub capacity: BuildableCapacity,
    /// Map location for the address, when one was supplied and a geocoder
    /// is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResolvedLocation>,
}

/// Routes for this module.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/check", post(run_check))
}

/// Evaluate a plan and assemble the full response.
async fn run_check(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let rule = *state.catalog.get(&req.district)?;

    let plan = BuildingPlan {
        site_area_sqm: req.site_area_sqm,
        building_area_sqm: req.building_area_sqm,
        total_floor_area_sqm: req.total_floor_area_sqm,
        corner_lot: req.corner_lot,
    };

    let assessment = evaluate(&plan, &rule)?;
    let cap = capacity(req.site_area_sqm, req.corner_lot, &rule)?;

    // Display-only: resolved after the verdict, and total by construction.
    let location = match (&state.geocoder, req.address.as_deref()) {
        (Some(geocoder), Some(address)) if !address.trim().is_empty() => {
            Some(geocoder.locate_or_fallback(address).await)
        }
        _ => None,
    };

    tracing::info!(
        district = %rule.district,
        compliant = assessment.compliant,
        geocoded = location.is_some(),
        "compliance check served"
    );

    Ok(Json(CheckResponse {
        district: rule.district.official_name().to_string(),
        assessment,
        capacity: cap,
        location,
    }))
}

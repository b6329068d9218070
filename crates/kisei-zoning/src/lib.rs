#![deny(missing_docs)]

//! # kisei-zoning — Catalog & Calculator for Hōfu Building Restrictions
//!
//! The two core pieces of the stack:
//!
//! - [`ZoningCatalog`]: the immutable table mapping each of the twelve
//!   use districts to its building-coverage limit (建ぺい率) and
//!   floor-area limit (容積率), constructed once at process start and
//!   shared by reference.
//!
//! - The calculator ([`evaluate`], [`coverage_percent`],
//!   [`floor_area_percent`], [`corner_adjusted_limit`],
//!   [`max_building_footprint`], [`max_total_floor_area`]): pure,
//!   deterministic functions from a [`BuildingPlan`] and a [`ZoneRule`]
//!   to a [`ComplianceAssessment`] and a [`BuildableCapacity`].
//!
//! ## Architecture
//!
//! ```text
//! kisei-core (districts)  -->  kisei-zoning (limits + arithmetic)  -->  presentation
//!   UseDistrict                  ZoningCatalog, evaluate()               API / CLI
//! ```
//!
//! Everything here is synchronous and side-effect-free. Geocoding, maps,
//! and charts live in their own crates; no geospatial type crosses into
//! this one.

pub mod calculator;
pub mod catalog;

pub use calculator::{
    capacity, corner_adjusted_limit, coverage_percent, evaluate, floor_area_percent,
    max_building_footprint, max_total_floor_area, BuildableCapacity, BuildingPlan,
    ComplianceAssessment, CORNER_LOT_RELAXATION,
};
pub use catalog::{ZoneRule, ZoningCatalog};

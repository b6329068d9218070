//! # API Route Modules
//!
//! - `districts` — the twelve use districts with their limits, in
//!   presentation order, for populating a selection control.
//! - `check` — evaluate a building plan against a district's limits;
//!   optionally geocodes an address for the map pin (display only).
//! - `capacity` — the buildable-capacity figures for a lot (the bar
//!   chart's three data points).

pub mod capacity;
pub mod check;
pub mod districts;

//! # kisei-cli — CLI for the Hōfu Building Restriction Simulator
//!
//! Provides the `kisei` command-line interface over the zoning catalog,
//! the compliance calculator, and the geocoder.
//!
//! ## Subcommands
//!
//! - `kisei districts` — the twelve use districts with their limits.
//! - `kisei check` — evaluate a building plan against a district.
//! - `kisei capacity` — maximum buildable areas for a lot.
//! - `kisei locate` — geocode an address for map display.
//!
//! ## Exit Codes
//!
//! - `0` — success (and, for `check`, a compliant plan).
//! - `1` — non-compliant plan, rejected input, or (for `locate`) the
//!   fallback coordinate.
//! - `2` — operational error.

pub mod capacity;
pub mod check;
pub mod districts;
pub mod locate;

use anyhow::Context;

/// Build the current-thread tokio runtime used by subcommands that call
/// the async geocoder. `main` itself stays synchronous.
pub fn geocode_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime for geocoding")
}

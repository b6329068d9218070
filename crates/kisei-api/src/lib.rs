#![deny(missing_docs)]

//! # kisei-api — Axum API for the Hōfu Building Restriction Simulator
//!
//! The HTTP presentation layer over `kisei-zoning`. The form-shaped
//! surface the original interactive simulator exposes, as JSON:
//!
//! | Method | Path                | Module                 |
//! |--------|---------------------|------------------------|
//! | GET    | `/api/v1/districts` | [`routes::districts`]  |
//! | POST   | `/api/v1/check`     | [`routes::check`]      |
//! | POST   | `/api/v1/capacity`  | [`routes::capacity`]   |
//! | GET    | `/health/liveness`  | (inline)               |
//!
//! No authentication: the simulator is a public read-only calculator.
//! Request tracing via `tower_http::trace::TraceLayer`.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router with all routes and middleware.
///
/// The health probe is mounted outside the traced API router so probe
/// noise stays out of request traces.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::districts::router())
        .merge(routes::check::router())
        .merge(routes::capacity::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new().route("/health/liveness", axum::routing::get(liveness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

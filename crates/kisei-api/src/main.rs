//! # kisei-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the building restriction simulator.
//! Binds to a configurable port (default 8080).

use kisei_api::state::AppState;
use kisei_geocode::GeocodeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    // Geocoding is best-effort: a bad configuration degrades to checks
    // without a map location rather than refusing to start.
    let geocoder = match GeocodeClient::from_env() {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!("geocoder not configured: {e}. Map locations will be omitted.");
            None
        }
    };

    let state = AppState::new(geocoder);
    let app = kisei_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("kisei API listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

// src/main.rs

use std::env;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

mod estimator;
mod models;
mod routes;
mod store;

#[derive(Clone)]
pub struct AppState {
    pub store: store::Store,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState {
        store: store::Store::new(),
    };

    // The static site is served elsewhere; permissive CORS for its calls
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // health
        .route("/health", get(routes::health::health))
        // lead capture
        .route("/api/contact", post(routes::contact::submit_contact))
        .route("/api/leads", get(routes::contact::list_leads))
        // estimator + telemetry
        .route("/api/estimate", post(routes::estimate::compute_estimate))
        .route("/api/estimate-log", post(routes::estimate::log_estimate))
        .route("/api/estimate-logs", get(routes::estimate::list_estimate_logs))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3001);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("API listening on http://127.0.0.1:{port}");

    axum::serve(listener, api.into_make_service()).await?;
    Ok(())
}

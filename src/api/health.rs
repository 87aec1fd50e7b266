//! Health check endpoint

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::routes;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Build health router (no state needed)
pub fn router() -> Router {
    Router::new().route(routes::HEALTH, get(health))
}

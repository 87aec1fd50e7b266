//! Descriptor and manifest endpoints
//!
//! Both documents are regenerated from the deployment config on every request.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use super::ApiState;
use crate::descriptor::build_descriptor;
use crate::manifest::build_manifest;
use crate::routes;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const YAML_CONTENT_TYPE: &str = "application/yaml; charset=utf-8";

/// Descriptor as JSON
async fn openapi_json(State(state): State<Arc<ApiState>>) -> Result<impl IntoResponse, StatusCode> {
    let body = build_descriptor(&state.deployment).to_json().map_err(|e| {
        tracing::error!(error = %e, "failed to render descriptor");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body))
}

/// Descriptor as YAML
async fn openapi_yaml(State(state): State<Arc<ApiState>>) -> Result<impl IntoResponse, StatusCode> {
    let body = build_descriptor(&state.deployment).to_yaml().map_err(|e| {
        tracing::error!(error = %e, "failed to render descriptor yaml");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], body))
}

/// Plugin manifest
async fn manifest(State(state): State<Arc<ApiState>>) -> Result<impl IntoResponse, StatusCode> {
    let body = build_manifest(&state.deployment, &state.contact_email)
        .to_json()
        .map_err(|e| {
            tracing::error!(error = %e, "failed to render manifest");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body))
}

/// Build document routes
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(routes::OPENAPI_JSON, get(openapi_json))
        .route(routes::OPENAPI_YAML, get(openapi_yaml))
        .route(routes::MANIFEST_WELL_KNOWN, get(manifest))
        .route(routes::MANIFEST_LEGACY, get(manifest))
        .with_state(state)
}

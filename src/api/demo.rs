//! Demo action endpoints
//!
//! No lookup happens here: each handler echoes the query next to canned
//! results from the [`FixtureSet`](crate::fixtures::FixtureSet) in state.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiState;
use super::extract::{LenientJson, coerce_count, truthy_string};
use crate::fixtures::{CalendarEvent, Email, WebResult};
use crate::routes;

/// Value of the `source` field on every demo response
pub const DEMO_SOURCE: &str = "demo";

/// Calendar search body
#[derive(Debug, Default, Deserialize)]
pub struct CalendarSearchRequest {
    pub query: Option<Value>,
    pub time_min: Option<Value>,
    pub time_max: Option<Value>,
}

/// Email search body
#[derive(Debug, Default, Deserialize)]
pub struct GmailSearchRequest {
    pub query: Option<Value>,
    pub max_results: Option<Value>,
}

/// Web search body
#[derive(Debug, Default, Deserialize)]
pub struct WebSearchRequest {
    pub query: Option<Value>,
}

/// Calendar search response
#[derive(Debug, Serialize)]
pub struct CalendarSearchResponse {
    pub ok: bool,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    pub events: Vec<CalendarEvent>,
}

/// Email search response
#[derive(Debug, Serialize)]
pub struct GmailSearchResponse {
    pub ok: bool,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    pub emails: Vec<Email>,
}

/// Web search response
#[derive(Debug, Serialize)]
pub struct WebSearchResponse {
    pub ok: bool,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    pub results: Vec<WebResult>,
}

async fn calendar_search(
    State(state): State<Arc<ApiState>>,
    LenientJson(req): LenientJson<CalendarSearchRequest>,
) -> Json<CalendarSearchResponse> {
    tracing::debug!(query = ?req.query, "demo calendar search");

    let event = state.fixtures.calendar_event(
        truthy_string(req.time_min.as_ref()),
        truthy_string(req.time_max.as_ref()),
    );

    Json(CalendarSearchResponse {
        ok: true,
        source: DEMO_SOURCE,
        query: req.query,
        events: vec![event],
    })
}

async fn gmail_search(
    State(state): State<Arc<ApiState>>,
    LenientJson(req): LenientJson<GmailSearchRequest>,
) -> Json<GmailSearchResponse> {
    let limit = coerce_count(req.max_results.as_ref());
    tracing::debug!(query = ?req.query, ?limit, "demo email search");

    Json(GmailSearchResponse {
        ok: true,
        source: DEMO_SOURCE,
        query: req.query,
        emails: state.fixtures.emails(limit).to_vec(),
    })
}

async fn web_search(
    State(state): State<Arc<ApiState>>,
    LenientJson(req): LenientJson<WebSearchRequest>,
) -> Json<WebSearchResponse> {
    tracing::debug!(query = ?req.query, "demo web search");

    Json(WebSearchResponse {
        ok: true,
        source: DEMO_SOURCE,
        query: req.query,
        results: state.fixtures.web_results.clone(),
    })
}

/// Build demo action routes
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(routes::CALENDAR_SEARCH, post(calendar_search))
        .route(routes::GMAIL_SEARCH, post(gmail_search))
        .route(routes::WEB_SEARCH, post(web_search))
        .with_state(state)
}

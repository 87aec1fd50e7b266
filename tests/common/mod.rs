//! Shared test utilities

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use demo_actions::{ApiServerBuilder, DeploymentConfig};
use tower::ServiceExt;

/// Public domain used by test deployments
pub const TEST_DOMAIN: &str = "https://demo.example.com";

/// Build a router for a test deployment
#[must_use]
pub fn build_test_router() -> Router {
    let deployment = DeploymentConfig::new(TEST_DOMAIN, 8080).expect("valid test domain");
    ApiServerBuilder::new(deployment).build().router()
}

/// Send a request through a fresh router
pub async fn send(request: Request<Body>) -> Response<Body> {
    build_test_router()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

/// GET `uri`
pub async fn get(uri: &str) -> Response<Body> {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

/// POST a raw body to `uri` as JSON
pub async fn post_raw(uri: &str, body: &str) -> Response<Body> {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Collect a response body as bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

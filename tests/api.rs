//! API endpoint integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use demo_actions::{ApiServerBuilder, DeploymentConfig, Descriptor, FixtureSet, ManifestDocument};
use tower::ServiceExt;

mod common;
use common::{TEST_DOMAIN, body_bytes, body_json, get, post_raw, send};

#[tokio::test]
async fn test_health_endpoint() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn test_health_unaffected_by_prior_requests() {
    let app = common::build_test_router();

    for uri in ["/web/search", "/gmail/search", "/calendar/search"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::from("{garbage"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ok"], true);
}

#[tokio::test]
async fn test_openapi_json_served_with_domain() {
    let response = get("/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );

    let json = body_json(response).await;
    assert_eq!(json["servers"][0]["url"], TEST_DOMAIN);
    assert_eq!(
        json["paths"]["/gmail/search"]["post"]["operationId"],
        "searchGmail"
    );
}

#[tokio::test]
async fn test_openapi_yaml_matches_json() {
    let response = get("/openapi.yaml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/yaml; charset=utf-8"
    );
    let from_yaml: Descriptor = serde_yaml::from_slice(&body_bytes(response).await).unwrap();

    let from_json: Descriptor =
        serde_json::from_slice(&body_bytes(get("/openapi.json").await).await).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[tokio::test]
async fn test_manifest_served_at_both_locations() {
    let well_known = get("/.well-known/ai-plugin.json").await;
    assert_eq!(well_known.status(), StatusCode::OK);
    assert_eq!(
        well_known.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );
    let well_known = body_bytes(well_known).await;

    let legacy = get("/ai-plugin.json").await;
    assert_eq!(legacy.status(), StatusCode::OK);
    assert_eq!(body_bytes(legacy).await, well_known);
}

#[tokio::test]
async fn test_manifest_api_url_resolves_to_served_descriptor() {
    let manifest: ManifestDocument =
        serde_json::from_slice(&body_bytes(get("/.well-known/ai-plugin.json").await).await)
            .unwrap();

    let path = manifest
        .api
        .url
        .strip_prefix(TEST_DOMAIN)
        .expect("api url under deployment domain");
    let response = get(path).await;
    assert_eq!(response.status(), StatusCode::OK);

    let descriptor: Descriptor = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(descriptor.server_url(), Some(TEST_DOMAIN));
}

#[tokio::test]
async fn test_gmail_max_results_truncates() {
    let json = body_json(post_raw("/gmail/search", r#"{"max_results": 1}"#).await).await;
    assert_eq!(json["emails"].as_array().unwrap().len(), 1);
    assert_eq!(json["emails"][0]["from"], "Azmal Khokan");

    let json = body_json(post_raw("/gmail/search", r#"{"max_results": 0}"#).await).await;
    assert!(json["emails"].as_array().unwrap().is_empty());

    let json = body_json(post_raw("/gmail/search", r#"{"query": "room"}"#).await).await;
    assert_eq!(json["emails"].as_array().unwrap().len(), 2);
    assert_eq!(json["query"], "room");
    assert_eq!(json["ok"], true);
    assert_eq!(json["source"], "demo");

    let json = body_json(post_raw("/gmail/search", r#"{"max_results": 10}"#).await).await;
    assert_eq!(json["emails"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_gmail_max_results_coerces_strings() {
    let json = body_json(post_raw("/gmail/search", r#"{"max_results": "1"}"#).await).await;
    assert_eq!(json["emails"].as_array().unwrap().len(), 1);

    let json = body_json(post_raw("/gmail/search", r#"{"max_results": "lots"}"#).await).await;
    assert_eq!(json["emails"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_calendar_echoes_time_window() {
    let json = body_json(
        post_raw(
            "/calendar/search",
            r#"{"query":"class","time_min":"2025-09-01T08:00:00Z","time_max":"2025-09-01T10:00:00Z"}"#,
        )
        .await,
    )
    .await;

    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["start"], "2025-09-01T08:00:00Z");
    assert_eq!(events[0]["end"], "2025-09-01T10:00:00Z");
    assert_eq!(events[0]["title"], "Demo: TAELED803 class");
    assert_eq!(json["query"], "class");
}

#[tokio::test]
async fn test_calendar_defaults_time_window() {
    let json = body_json(post_raw("/calendar/search", "{}").await).await;
    assert_eq!(json["events"][0]["start"], "2025-08-18T09:00:00Z");
    assert_eq!(json["events"][0]["end"], "2025-08-18T11:00:00Z");

    let json = body_json(post_raw("/calendar/search", r#"{"time_min":""}"#).await).await;
    assert_eq!(json["events"][0]["start"], "2025-08-18T09:00:00Z");
}

#[tokio::test]
async fn test_web_search_empty_body() {
    let response = post_raw("/web/search", "{}").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["source"], "demo");
    assert!(json.get("query").is_none());
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["url"], "https://example.com/ccfo");
}

#[tokio::test]
async fn test_malformed_bodies_treated_as_empty() {
    for body in ["", "{not json", "[1,2,3]", "42", r#"{"query": 5, "max_results": {}}"#] {
        let response = post_raw("/gmail/search", body).await;
        assert_eq!(response.status(), StatusCode::OK, "body: {body}");
        let json = body_json(response).await;
        assert_eq!(json["emails"].as_array().unwrap().len(), 2, "body: {body}");
    }

    // No content-type header at all
    let response = send(
        Request::builder()
            .method("POST")
            .uri("/web/search")
            .body(Body::from(r#"{"query":"pte"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["query"], "pte");
}

#[tokio::test]
async fn test_options_preflight_on_any_path() {
    for uri in ["/gmail/search", "/health", "/does/not/exist"] {
        let response = send(
            Request::builder()
                .method("OPTIONS")
                .uri(uri)
                .header("origin", "https://chat.example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{uri}");
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization, OpenAI-Conversation-ID"
        );
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_cors_headers_on_regular_responses() {
    for response in [get("/health").await, post_raw("/web/search", "{}").await, get("/missing").await] {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = get("/calendar/list").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_injected_fixtures() {
    let mut fixtures = FixtureSet::demo();
    fixtures.web_results.truncate(1);

    let app = ApiServerBuilder::new(DeploymentConfig::local(9000))
        .fixtures(fixtures)
        .contact_email("ops@example.com".to_string())
        .build()
        .router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/web/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await["results"].as_array().unwrap().len(), 1);

    let response = app
        .oneshot(Request::builder().uri("/ai-plugin.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let manifest = body_json(response).await;
    assert_eq!(manifest["api"]["url"], "http://localhost:9000/openapi.json");
    assert_eq!(manifest["contact_email"], "ops@example.com");
}

#[tokio::test]
async fn test_static_dir_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("legal"), "demo terms").unwrap();

    let app = ApiServerBuilder::new(DeploymentConfig::local(8080))
        .static_dir(Some(dir.path().to_path_buf()))
        .build()
        .router();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/legal").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(body_bytes(response).await, b"demo terms");

    // Routed paths still win over the static directory
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await["ok"], true);
}

//! Integration test for the full report request/response flow, driven
//! through the router with no network and no completion credential.

use adscope_alerts::AlertStore;
use adscope_analytics::AnalyticsService;
use adscope_api::{ApiServer, AppState};
use adscope_core::config::CompletionConfig;
use adscope_insights::CompletionClient;
use adscope_platforms::PlatformRegistry;
use adscope_settings::{ApiKeyStore, Plan, SettingsStore};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceExt;

/// State wired for tests: offline completion profile, zero pacing delays.
fn test_state() -> AppState {
    AppState {
        completion: Arc::new(CompletionClient::new(CompletionConfig::offline())),
        analytics: Arc::new(AnalyticsService::new()),
        platforms: Arc::new(PlatformRegistry::new()),
        alerts: Arc::new(AlertStore::new()),
        settings: Arc::new(SettingsStore::new()),
        api_keys: Arc::new(ApiKeyStore::new()),
        plan: Plan::Basic,
        node_id: "test-node".to_string(),
        start_time: Instant::now(),
    }
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = to_bytes(body, usize::MAX).await.expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn test_generate_report_end_to_end_without_credential() {
    let app = ApiServer::router(test_state());

    let request = json_request(
        Method::POST,
        "/api/ai/generate-report",
        serde_json::json!({
            "platforms": ["facebook"],
            "timeframe": "last_30_days",
            "analyticsData": {
                "facebook": {
                    "spend": 12500,
                    "impressions": 600000,
                    "clicks": 7200,
                    "conversions": 290,
                    "ctr": 1.2,
                    "cpc": 1.74,
                    "cpm": 20.83,
                    "conversion_rate": 4.03
                }
            }
        }),
    );

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);

    let report = body_json(response.into_body()).await;
    assert_eq!(report["source"], "mock");
    assert_eq!(report["timeframe"], "last_30_days");
    assert_eq!(report["platforms"], serde_json::json!(["facebook"]));
    assert_eq!(report["summary"]["totalSpend"], 12500.0);
    assert_eq!(report["summary"]["overallCtr"], "1.20");
    assert_eq!(report["insights"].as_array().unwrap().len(), 3);
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(report["trends"].as_array().unwrap().len(), 3);
    assert!(report["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_generate_report_rejects_empty_platforms() {
    let app = ApiServer::router(test_state());

    let request = json_request(
        Method::POST,
        "/api/ai/generate-report",
        serde_json::json!({
            "platforms": [],
            "timeframe": "last_30_days",
            "analyticsData": {}
        }),
    );

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "platforms");
}

#[tokio::test]
async fn test_platform_insights_returns_insights_only() {
    let app = ApiServer::router(test_state());

    let request = json_request(
        Method::POST,
        "/api/ai/platform-insights",
        serde_json::json!({
            "platform": "tiktok",
            "data": { "spend": 7490, "clicks": 2500 }
        }),
    );

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["insights"].as_array().unwrap().len(), 3);
    assert!(body.get("recommendations").is_none());
}

#[tokio::test]
async fn test_unified_analytics_envelope() {
    let app = ApiServer::router(test_state());

    let request = Request::builder()
        .uri("/api/analytics/unified")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalSpend"], 28890.0);
    assert!(body["data"]["platformBreakdown"]["facebook"].is_object());
}

#[tokio::test]
async fn test_unknown_platform_analytics_is_404() {
    let app = ApiServer::router(test_state());

    let request = Request::builder()
        .uri("/api/analytics/platform/myspace")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Platform not found");
}

#[tokio::test]
async fn test_platform_connect_and_sync_flow() {
    let state = test_state();
    let app = ApiServer::router(state.clone());

    let request = json_request(
        Method::POST,
        "/api/platforms/connect",
        serde_json::json!({
            "platform": "snapchat",
            "credentials": { "token": "abc" }
        }),
    );
    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("snapchat_"));

    let app = ApiServer::router(state.clone());
    let request = json_request(Method::POST, &format!("/api/platforms/sync/{id}"), serde_json::json!({}));
    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);

    let app = ApiServer::router(state);
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/platforms/disconnect/{id}"))
        .body(Body::empty())
        .expect("request builds");
    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = ApiServer::router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "OK");

    let app = ApiServer::router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("handler runs");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "Route not found");
}

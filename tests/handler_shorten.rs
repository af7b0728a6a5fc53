mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use link_shortener::api::handlers::shorten_handler;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use serde_json::json;
use std::sync::Arc;

fn server() -> TestServer {
    let state = common::create_test_state(Arc::new(InMemoryLinkRepository::new()));
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalUrl"], "https://example.com");

    let short_id = json["shortId"].as_str().unwrap();
    assert_eq!(short_id.len(), 6);
    assert_eq!(
        json["shortUrl"],
        format!("{}/{}", common::BASE_URL, short_id)
    );
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_ids() {
    let server = server();

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["shortId"], second["shortId"]);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = server();

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL is required");
}

#[tokio::test]
async fn test_shorten_null_url() {
    let server = server();

    let response = server.post("/shorten").json(&json!({ "url": null })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = server();

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL is required");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_javascript_scheme() {
    let server = server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let server = server();

    let response = server
        .post("/shorten")
        .text("{\"url\":")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_shorten_wrong_type() {
    let server = server();

    let response = server.post("/shorten").json(&json!({ "url": 42 })).await;

    response.assert_status_bad_request();
}

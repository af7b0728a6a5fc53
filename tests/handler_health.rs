mod common;

#[tokio::test]
async fn test_health_endpoint() {
    let server = common::memory_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["backend"], "memory");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = common::memory_server();

    let response = server.get("/nope").await;

    response.assert_status_not_found();
}

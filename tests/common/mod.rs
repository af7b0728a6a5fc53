#![allow(dead_code)]

use axum_test::TestServer;
use std::path::Path;
use std::sync::Arc;
use link_shortener::application::services::{LinkService, LinkSettings};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::{FileLinkRepository, InMemoryLinkRepository};
use link_shortener::routes::router;
use link_shortener::state::AppState;

pub const BASE_URL: &str = "rupeek.co/short";

pub fn create_test_state(repository: Arc<dyn LinkRepository>) -> AppState {
    create_test_state_with(repository, LinkSettings::default())
}

pub fn create_test_state_with(
    repository: Arc<dyn LinkRepository>,
    settings: LinkSettings,
) -> AppState {
    AppState::new(Arc::new(LinkService::new(repository, settings)))
}

pub fn memory_server() -> TestServer {
    server_for(Arc::new(InMemoryLinkRepository::new()))
}

pub async fn file_server(path: &Path) -> TestServer {
    let repository = FileLinkRepository::open(path).await.unwrap();
    server_for(Arc::new(repository))
}

pub fn server_for(repository: Arc<dyn LinkRepository>) -> TestServer {
    TestServer::new(router(create_test_state(repository))).unwrap()
}

/// Creates a short link through the API and returns its short id.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": url }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    json["shortId"].as_str().unwrap().to_string()
}

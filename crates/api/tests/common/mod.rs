#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use trivia_db::models::question::CreateQuestion;
use trivia_db::store::{MemoryStore, TriviaStore};

use trivia_api::config::{LogFormat, ServerConfig, StoreBackend};
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware
/// stack and fallbacks are exercised too.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store: store as Arc<dyn TriviaStore>,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A store holding the default categories and no questions.
pub fn empty_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_default_categories())
}

pub fn new_question(text: &str, category: i64) -> CreateQuestion {
    CreateQuestion {
        question: text.to_string(),
        answer: "An answer".to_string(),
        difficulty: 2,
        category,
    }
}

/// Insert `(id, text, category)` questions with fixed ids.
pub async fn seed(store: &MemoryStore, questions: &[(i64, &str, i64)]) {
    for &(id, text, category) in questions {
        store.insert_question(id, new_question(text, category)).await;
    }
}

/// Insert `count` questions with ids `1..=count`, cycling over categories 1-3.
pub async fn seed_numbered(store: &MemoryStore, count: i64) {
    for id in 1..=count {
        let text = format!("Question number {id}?");
        store
            .insert_question(id, new_question(&text, (id - 1) % 3 + 1))
            .await;
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the uniform error body for `status`.
pub fn assert_error_body(json: &serde_json::Value, status: u16, message: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status);
    assert_eq!(json["message"], message);
}

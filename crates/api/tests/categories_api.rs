//! HTTP-level tests for `/categories` endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error_body, body_json, build_test_app, empty_store, get, seed};

// ---------------------------------------------------------------------------
// Test: GET /categories returns the id -> label mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_categories_returns_mapping() {
    let app = build_test_app(empty_store());
    let response = get(app, "/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let categories = json["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"]["6"], "Sports");
}

// ---------------------------------------------------------------------------
// Test: GET /categories/{id}/questions filters by category
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_questions_filtered() {
    let store = empty_store();
    seed(
        &store,
        &[
            (1, "What is H2O?", 1),
            (2, "Who painted the Mona Lisa?", 2),
            (3, "What is the speed of light?", 1),
        ],
    )
    .await;
    let app = build_test_app(store);

    let response = get(app, "/categories/1/questions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[1]["id"], 3);
    assert!(questions.iter().all(|q| q["category"] == 1));
    assert_eq!(json["totalQuestions"], 3);
    assert_eq!(json["currentCategory"], "Science");
}

#[tokio::test]
async fn current_category_follows_filter() {
    let store = empty_store();
    seed(&store, &[(1, "Who painted the Mona Lisa?", 2)]).await;
    let app = build_test_app(store);

    let json = body_json(get(app, "/categories/2/questions").await).await;
    assert_eq!(json["currentCategory"], "Art");
}

// ---------------------------------------------------------------------------
// Test: missing or empty category returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_category_returns_404() {
    let app = build_test_app(empty_store());
    let response = get(app, "/categories/100/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_error_body(&json, 404, "Not Found");
}

#[tokio::test]
async fn empty_category_returns_404() {
    let store = empty_store();
    seed(&store, &[(1, "What is H2O?", 1)]).await;
    let app = build_test_app(store);

    let response = get(app, "/categories/4/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_category_id_returns_404() {
    let app = build_test_app(empty_store());
    let response = get(app, "/categories/science/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_error_body(&json, 404, "Not Found");
}

//! Handlers for categories and category-filtered question listings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_db::models::category::category_labels;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::response::{CategoriesResponse, QuestionListResponse};
use crate::state::AppState;

/// GET /categories
///
/// All categories as an `{id: label}` mapping.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.store.list_categories().await?;

    Ok(Json(CategoriesResponse {
        categories: category_labels(&categories),
    }))
}

/// GET /categories/{id}/questions
///
/// Every question in one category. A missing category and an empty one are
/// both reported as 404.
pub async fn list_category_questions(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .store
        .find_category(category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;

    let questions = state.store.list_questions_by_category(category.id).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "category {category_id} has no questions"
        )));
    }

    let total_questions = state.store.count_questions().await?;

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        current_category: Some(category.kind),
    }))
}

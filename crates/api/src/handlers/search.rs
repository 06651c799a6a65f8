//! Handler for free-text question search.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_db::models::question::SearchQuestions;

use super::default_category_label;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::QuestionListResponse;
use crate::state::AppState;

/// POST /search
///
/// Case-insensitive substring match on question text. Results are not
/// paginated; no matches is a 404.
pub async fn search_questions(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SearchQuestions>,
) -> AppResult<impl IntoResponse> {
    let questions = state.store.search_questions(&input.search_term).await?;

    tracing::debug!(
        term = %input.search_term,
        matches = questions.len(),
        "Question search",
    );

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "no question matches {:?}",
            input.search_term
        )));
    }

    let total_questions = state.store.count_questions().await?;
    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        current_category: default_category_label(&categories),
    }))
}

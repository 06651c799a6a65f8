//! Handlers for question listing, creation and deletion.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::{paginate, parse_page};
use trivia_core::types::DbId;
use trivia_db::models::category::category_labels;
use trivia_db::models::question::CreateQuestion;
use validator::Validate;

use super::default_category_label;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::response::{QuestionCreatedResponse, QuestionDeletedResponse, QuestionPageResponse};
use crate::state::AppState;

/// GET /questions?page=N
///
/// One page of questions ordered by id, with the total count and the
/// category mapping. An empty page is a 404.
pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = parse_page(params.page.as_deref())?;

    let questions = state.store.list_questions().await?;
    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(AppError::NotFound(format!("page {page} is empty")));
    }

    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionPageResponse {
        questions: current.to_vec(),
        total_questions: questions.len() as i64,
        categories: category_labels(&categories),
        current_category: default_category_label(&categories),
    }))
}

/// POST /questions
///
/// Create a question. The referenced category must exist.
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_not_blank("question", &input.question)?;
    validate_not_blank("answer", &input.answer)?;

    if state.store.find_category(input.category).await?.is_none() {
        return Err(AppError::Core(CoreError::Unprocessable(format!(
            "category {} does not exist",
            input.category
        ))));
    }

    let question = state.store.create_question(&input).await?;

    tracing::info!(
        question_id = question.id,
        category_id = question.category_id,
        "Question created",
    );

    Ok((
        StatusCode::CREATED,
        Json(QuestionCreatedResponse {
            status: StatusCode::CREATED.as_u16(),
            id: question.id,
        }),
    ))
}

/// DELETE /questions/{id}
///
/// Deleting a question that does not exist is a 422.
pub async fn delete_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete_question(question_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::Unprocessable(format!(
            "question {question_id} does not exist"
        ))));
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(QuestionDeletedResponse {
        status_code: StatusCode::OK.as_u16(),
        id: question_id,
    }))
}

fn validate_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

//! Handler for quiz play.
//!
//! The client keeps the quiz state: each request lists the ids already
//! asked, and the server answers with the next question or `null`.

use std::collections::HashSet;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use trivia_core::error::CoreError;
use trivia_core::quiz::{select_next, QuizCategoryRef, QuizTarget};
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::Question;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::QuizResponse;
use crate::state::AppState;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategoryRef,
}

/// POST /quizzes
///
/// Return the next unseen question for the chosen category, or for the
/// first category (by id) that still has one when playing all categories.
/// An unknown category is a 404; running out of questions is not an error.
pub async fn next_question(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let target = input.quiz_category.target()?;

    let (category_order, questions) = match &target {
        QuizTarget::All => {
            let categories = state.store.list_categories().await?;
            let questions = state.store.list_questions().await?;
            (categories.iter().map(|c| c.id).collect::<Vec<_>>(), questions)
        }
        QuizTarget::ByType(kind) => {
            let category = state
                .store
                .find_category_by_type(kind)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("category {kind:?}")))?;
            category_questions(&state, &category).await?
        }
        QuizTarget::ById(id) => {
            let category = state.store.find_category(*id).await?.ok_or(AppError::Core(
                CoreError::NotFound {
                    entity: "Category",
                    id: *id,
                },
            ))?;
            category_questions(&state, &category).await?
        }
    };

    let previous: HashSet<DbId> = input.previous_questions.iter().copied().collect();
    let question = select_next(&category_order, &questions, &previous).cloned();

    tracing::debug!(
        quiz_target = ?target,
        asked = previous.len(),
        question_id = question.as_ref().map(|q| q.id),
        "Quiz question selected",
    );

    Ok(Json(QuizResponse { question }))
}

async fn category_questions(
    state: &AppState,
    category: &Category,
) -> AppResult<(Vec<DbId>, Vec<Question>)> {
    let questions = state.store.list_questions_by_category(category.id).await?;
    Ok((vec![category.id], questions))
}

//! Response payloads for API handlers.
//!
//! Field names follow what the quiz front end reads, which is why some
//! payloads are snake_case and others camelCase.

use std::collections::BTreeMap;

use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::question::Question;

/// `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<DbId, String>,
}

/// `GET /questions?page=N`.
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<DbId, String>,
    pub current_category: Option<String>,
}

/// `POST /search` and `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<String>,
}

/// `POST /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub status: u16,
    pub id: DbId,
}

/// `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDeletedResponse {
    pub status_code: u16,
    pub id: DbId,
}

/// `POST /quizzes`. `question` is `null` once every eligible question has
/// been asked.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

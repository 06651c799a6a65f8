//! Question model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::quiz::QuizCandidate;
use trivia_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    #[serde(rename = "category")]
    pub category_id: DbId,
    pub difficulty: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl QuizCandidate for Question {
    fn id(&self) -> DbId {
        self.id
    }

    fn category_id(&self) -> DbId {
        self.category_id
    }
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 1000))]
    pub answer: String,
    /// Difficulty score, 1 (easiest) to 5.
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
    #[validate(range(min = 1))]
    pub category: DbId,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuestions {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

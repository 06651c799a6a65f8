//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const COLUMNS: &str = "id, question, answer, category_id, difficulty, created_at, updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category_id, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// List every question, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// List the questions of one category, ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE category_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over question text, ordered by id.
    ///
    /// LIKE wildcards in `term` are matched literally.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(term));
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `%`, `_` and `\` so they match themselves in a LIKE pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

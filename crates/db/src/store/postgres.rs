use async_trait::async_trait;
use trivia_core::types::DbId;

use super::{StoreResult, TriviaStore};
use crate::models::category::Category;
use crate::models::question::{CreateQuestion, Question};
use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::DbPool;

/// [`TriviaStore`] backed by PostgreSQL through the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        CategoryRepo::list_all(&self.pool).await
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        CategoryRepo::find_by_id(&self.pool, id).await
    }

    async fn find_category_by_type(&self, kind: &str) -> StoreResult<Option<Category>> {
        CategoryRepo::find_by_type(&self.pool, kind).await
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        QuestionRepo::list_all(&self.pool).await
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        QuestionRepo::count(&self.pool).await
    }

    async fn list_questions_by_category(&self, category_id: DbId) -> StoreResult<Vec<Question>> {
        QuestionRepo::list_by_category(&self.pool, category_id).await
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        QuestionRepo::search(&self.pool, term).await
    }

    async fn create_question(&self, input: &CreateQuestion) -> StoreResult<Question> {
        QuestionRepo::create(&self.pool, input).await
    }

    async fn delete_question(&self, id: DbId) -> StoreResult<bool> {
        QuestionRepo::delete(&self.pool, id).await
    }
}

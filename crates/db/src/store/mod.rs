//! The storage seam used by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn TriviaStore>` and never reach for a pool
//! directly, so the same routes run against PostgreSQL in production and
//! against [`MemoryStore`] in development and tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use trivia_core::types::DbId;

use crate::models::category::Category;
use crate::models::question::{CreateQuestion, Question};

pub use memory::{MemoryStore, DEFAULT_CATEGORIES};
pub use postgres::PgStore;

/// Result type shared by all store backends.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Question and category persistence.
///
/// Listings are ordered by ascending id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Check that the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>>;

    /// Exact, case-sensitive label lookup.
    async fn find_category_by_type(&self, kind: &str) -> StoreResult<Option<Category>>;

    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn count_questions(&self) -> StoreResult<i64>;

    async fn list_questions_by_category(&self, category_id: DbId) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on question text.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn create_question(&self, input: &CreateQuestion) -> StoreResult<Question>;

    /// Returns `true` if a question was removed.
    async fn delete_question(&self, id: DbId) -> StoreResult<bool>;
}

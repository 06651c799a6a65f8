//! Repository for the `categories` table.
//!
//! Categories are seeded by migration and never written by the service.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::category::Category;

/// Column list for `categories` queries.
const COLUMNS: &str = "id, type, created_at, updated_at";

/// Read-only access to categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its exact label.
    pub async fn find_by_type(pool: &PgPool, kind: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE type = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(kind)
            .fetch_optional(pool)
            .await
    }
}

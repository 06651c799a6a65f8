//! Category model.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Build the `{id: label}` mapping the quiz client renders as its category list.
pub fn category_labels(categories: &[Category]) -> BTreeMap<DbId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the [`TriviaStore`](trivia_db::store::TriviaStore)
//! in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod categories;
pub mod fallback;
pub mod questions;
pub mod quizzes;
pub mod search;

use trivia_db::models::category::Category;

/// Label shown as the selected category on unfiltered views: the first
/// category by id, if any exist.
pub(crate) fn default_category_label(categories: &[Category]) -> Option<String> {
    categories.first().map(|c| c.kind.clone())
}

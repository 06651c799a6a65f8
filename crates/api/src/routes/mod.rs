pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// GET    /categories                      list_categories
/// GET    /categories/{id}/questions       list_category_questions
/// GET    /questions?page=N                list_questions
/// POST   /questions                       create_question
/// DELETE /questions/{id}                  delete_question
/// POST   /search                          search_questions
/// POST   /quizzes                         next_question
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}

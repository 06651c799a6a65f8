//! Router-level fallbacks so unmatched requests get the JSON error shape.

use crate::error::AppError;

/// No route matches the path.
pub async fn not_found() -> AppError {
    AppError::NotFound("no route for path".into())
}

/// The path matches but the method does not.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

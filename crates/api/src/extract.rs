//! Extractors whose rejections use the API's JSON error shape.
//!
//! Axum's own `Json`, `Path` and `Query` reject with plain-text bodies and,
//! for JSON bodies with missing fields, a 422. These wrappers turn body and
//! query rejections into [`AppError::BadRequest`](crate::error::AppError::BadRequest)
//! and path rejections into [`AppError::NotFound`](crate::error::AppError::NotFound).

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Numeric path parameters. A segment that is not an id is a 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

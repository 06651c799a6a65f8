//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page selection for question listings (`?page=`).
///
/// Kept as a raw string so non-numeric values can fall back to the first
/// page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

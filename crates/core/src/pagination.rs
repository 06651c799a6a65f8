//! Fixed-size page windows over question listings.
//!
//! Listings are loaded in full (ordered by id) and sliced here, so the
//! caller can report the total record count alongside a single page.

use std::num::IntErrorKind;
use std::ops::Range;

use crate::error::CoreError;

/// Number of questions shown per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the `page` query parameter is missing or not a number.
pub const DEFAULT_PAGE: i64 = 1;

/// Parse a raw `page` query value.
///
/// - Missing or non-numeric input falls back to [`DEFAULT_PAGE`].
/// - A numeric value of zero or below is rejected, however large.
/// - A positive value too large for `i64` is clamped to `i64::MAX`, which
///   lies past the end of any listing.
///
/// # Examples
///
/// ```
/// use trivia_core::pagination::parse_page;
///
/// assert_eq!(parse_page(None).unwrap(), 1);
/// assert_eq!(parse_page(Some("abc")).unwrap(), 1);
/// assert_eq!(parse_page(Some("3")).unwrap(), 3);
/// assert!(parse_page(Some("0")).is_err());
/// assert_eq!(parse_page(Some("99999999999999999999")).unwrap(), i64::MAX);
/// ```
pub fn parse_page(raw: Option<&str>) -> Result<i64, CoreError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PAGE);
    };

    let page = match raw.trim().parse::<i64>() {
        Ok(page) => page,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => {
                return Err(CoreError::Validation(format!(
                    "page must be a positive integer, got {}",
                    raw.trim()
                )))
            }
            _ => return Ok(DEFAULT_PAGE),
        },
    };

    if page < 1 {
        return Err(CoreError::Validation(format!(
            "page must be a positive integer, got {page}"
        )));
    }

    Ok(page)
}

/// Index window `[(page-1)*10, page*10)` for a 1-based page number.
///
/// Pages below 1 are treated as page 1; callers are expected to have run
/// [`parse_page`] first.
pub fn page_window(page: i64) -> Range<usize> {
    let index = usize::try_from(page.max(1) - 1).unwrap_or(usize::MAX);
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);
    start..start.saturating_add(QUESTIONS_PER_PAGE)
}

/// Return the records that fall on `page`, clipped to the slice length.
///
/// Pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let window = page_window(page);
    let start = window.start.min(items.len());
    let end = window.end.min(items.len());
    &items[start..end]
}

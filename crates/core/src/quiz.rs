//! Quiz question selection.
//!
//! A quiz is driven entirely by the client: every request carries the ids of
//! the questions already shown. Selection is deterministic. Within a category
//! the lowest unseen id wins, and in "all categories" mode categories are
//! tried in the order given until one still has an unseen question.
//!
//! All-categories mode always tries every category before reporting
//! exhaustion. There is no cap tied to the number of questions already
//! asked.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::DbId;

/// Category id the quiz client sends to mean "every category".
pub const ALL_CATEGORIES_ID: DbId = 0;

/// Anything the selector can pick from.
pub trait QuizCandidate {
    fn id(&self) -> DbId;
    fn category_id(&self) -> DbId;
}

/// The `quiz_category` object of a quiz request.
///
/// Clients send `{"id": 0}` (or `{"type": "click", "id": 0}`) for all
/// categories, otherwise the category's label and/or id. The id may arrive as
/// a JSON number or as a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryRef {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<DbId>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Which categories a quiz draws from, before lookup against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizTarget {
    All,
    ByType(String),
    ById(DbId),
}

impl QuizCategoryRef {
    /// Decide what the client asked for.
    ///
    /// An id of [`ALL_CATEGORIES_ID`] selects every category. Otherwise the
    /// label takes precedence over the id.
    pub fn target(&self) -> Result<QuizTarget, CoreError> {
        if self.id == Some(ALL_CATEGORIES_ID) {
            return Ok(QuizTarget::All);
        }

        if let Some(kind) = self.kind.as_deref().map(str::trim) {
            if !kind.is_empty() {
                return Ok(QuizTarget::ByType(kind.to_string()));
            }
        }

        match self.id {
            Some(id) if id > 0 => Ok(QuizTarget::ById(id)),
            Some(id) => Err(CoreError::Validation(format!(
                "quiz_category.id must not be negative, got {id}"
            ))),
            None => Err(CoreError::Validation(
                "quiz_category requires an id or a type".into(),
            )),
        }
    }
}

/// Pick the next question to ask.
///
/// Walks `category_order` and returns, for the first category that has one,
/// the lowest-id question of that category not in `previous`. `None` means
/// every category is exhausted.
pub fn select_next<'a, Q: QuizCandidate>(
    category_order: &[DbId],
    questions: &'a [Q],
    previous: &HashSet<DbId>,
) -> Option<&'a Q> {
    category_order.iter().find_map(|&category_id| {
        questions
            .iter()
            .filter(|q| q.category_id() == category_id && !previous.contains(&q.id()))
            .min_by_key(|q| q.id())
    })
}

fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(DbId),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid category id: {text:?}"))),
    }
}

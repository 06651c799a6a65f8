use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::types::DbId;

use super::{StoreResult, TriviaStore};
use crate::models::category::Category;
use crate::models::question::{CreateQuestion, Question};

/// Categories every fresh database starts with (mirrors the seed migration).
pub const DEFAULT_CATEGORIES: &[(DbId, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// In-process [`TriviaStore`].
///
/// Nothing is persisted across restarts. Category references on new
/// questions are not checked, the same as a schema without a foreign key.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    categories: BTreeMap<DbId, Category>,
    questions: BTreeMap<DbId, Question>,
    last_question_id: DbId,
}

impl MemoryStore {
    /// An empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding [`DEFAULT_CATEGORIES`] and no questions.
    pub fn with_default_categories() -> Self {
        Self::with_categories(DEFAULT_CATEGORIES)
    }

    /// A store holding the given `(id, label)` categories and no questions.
    pub fn with_categories(categories: &[(DbId, &str)]) -> Self {
        let now = chrono::Utc::now();
        let categories = categories
            .iter()
            .map(|&(id, kind)| {
                let category = Category {
                    id,
                    kind: kind.to_string(),
                    created_at: now,
                    updated_at: now,
                };
                (id, category)
            })
            .collect();

        Self {
            inner: RwLock::new(Inner {
                categories,
                ..Inner::default()
            }),
        }
    }

    /// Insert a question under a caller-chosen id, replacing any existing one.
    ///
    /// Ids handed out by [`TriviaStore::create_question`] continue after the
    /// highest id seen so far.
    pub async fn insert_question(&self, id: DbId, input: CreateQuestion) -> Question {
        let mut inner = self.inner.write().await;
        inner.last_question_id = inner.last_question_id.max(id);
        let question = build_question(id, input);
        inner.questions.insert(id, question.clone());
        question
    }
}

fn build_question(id: DbId, input: CreateQuestion) -> Question {
    let now = chrono::Utc::now();
    Question {
        id,
        question: input.question,
        answer: input.answer,
        category_id: input.category,
        difficulty: input.difficulty,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }

    async fn find_category_by_type(&self, kind: &str) -> StoreResult<Option<Category>> {
        Ok(self
            .inner
            .read()
            .await
            .categories
            .values()
            .find(|c| c.kind == kind)
            .cloned())
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.inner.read().await.questions.values().cloned().collect())
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Ok(self.inner.read().await.questions.len() as i64)
    }

    async fn list_questions_by_category(&self, category_id: DbId) -> StoreResult<Vec<Question>> {
        Ok(self
            .inner
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .inner
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create_question(&self, input: &CreateQuestion) -> StoreResult<Question> {
        let mut inner = self.inner.write().await;
        inner.last_question_id += 1;
        let question = build_question(inner.last_question_id, input.clone());
        inner.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.inner.write().await.questions.remove(&id).is_some())
    }
}

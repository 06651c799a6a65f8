//! Integration tests for the PostgreSQL-backed store.
//!
//! Need a running PostgreSQL reachable through `DATABASE_URL`; run with
//! `cargo test -p trivia-db -- --ignored`.

use sqlx::PgPool;
use trivia_db::models::question::CreateQuestion;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};
use trivia_db::store::{PgStore, TriviaStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_question(text: &str, category: i64) -> CreateQuestion {
    CreateQuestion {
        question: text.to_string(),
        answer: "An answer".to_string(),
        difficulty: 3,
        category,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn seed_categories_present(pool: PgPool) {
    let categories = CategoryRepo::list_all(&pool).await.unwrap();
    let labels: Vec<_> = categories.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(
        labels,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );

    let science = CategoryRepo::find_by_type(&pool, "Science").await.unwrap();
    assert_eq!(science.map(|c| c.id), Some(1));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn create_list_and_delete(pool: PgPool) {
    let first = QuestionRepo::create(&pool, &new_question("First?", 1)).await.unwrap();
    let second = QuestionRepo::create(&pool, &new_question("Second?", 2)).await.unwrap();
    assert!(second.id > first.id);

    let all = QuestionRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(QuestionRepo::count(&pool).await.unwrap(), 2);

    let art = QuestionRepo::list_by_category(&pool, 2).await.unwrap();
    assert_eq!(art.len(), 1);
    assert_eq!(art[0].id, second.id);

    assert!(QuestionRepo::delete(&pool, first.id).await.unwrap());
    assert!(!QuestionRepo::delete(&pool, first.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn search_is_case_insensitive_and_literal(pool: PgPool) {
    QuestionRepo::create(&pool, &new_question("Largest lake in Africa?", 3))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("What is 100% of 4?", 1))
        .await
        .unwrap();

    let africa = QuestionRepo::search(&pool, "africa").await.unwrap();
    assert_eq!(africa.len(), 1);

    let percent = QuestionRepo::search(&pool, "100%").await.unwrap();
    assert_eq!(percent.len(), 1);

    let underscore = QuestionRepo::search(&pool, "_").await.unwrap();
    assert!(underscore.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn unknown_category_rejected_by_foreign_key(pool: PgPool) {
    let result = QuestionRepo::create(&pool, &new_question("Orphan?", 999)).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn store_delegates_to_repositories(pool: PgPool) {
    let store = PgStore::new(pool);
    store.health_check().await.unwrap();

    let created = store.create_question(&new_question("Via store?", 4)).await.unwrap();
    let history = store.list_questions_by_category(4).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, created.id);
    assert_eq!(store.count_questions().await.unwrap(), 1);
}

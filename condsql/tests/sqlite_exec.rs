//! Runs compiled fragments against an in-memory SQLite database to check the
//! emitted SQL is accepted and selects the expected rows.

use condsql::{Condition, to_sql};
use serde_json::{Value, json};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

const PEOPLE: &[(&str, &str, i64, i64)] = &[
    ("alice", "seoul", 25, 1),
    ("bob", "daejeon", 31, 0),
    ("carol", "daegu", 19, 1),
    ("dave", "busan", 42, 1),
    ("erin", "Daejeon_2", 28, 0),
];

async fn setup() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE people (name TEXT NOT NULL, city TEXT NOT NULL, age INTEGER NOT NULL, active INTEGER NOT NULL)",
    )
    .execute(&pool)
    .await
    .unwrap();

    for (name, city, age, active) in PEOPLE {
        sqlx::query("INSERT INTO people (name, city, age, active) VALUES (?, ?, ?, ?)")
            .bind(*name)
            .bind(*city)
            .bind(*age)
            .bind(*active)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool
}

async fn names(pool: &SqlitePool, condition: Value) -> Vec<String> {
    let fragment = to_sql(&Condition::from(condition));
    assert!(!fragment.is_empty(), "condition compiled to nothing");

    let sql = format!("SELECT name FROM people WHERE {} ORDER BY name", fragment);
    sqlx::query_scalar::<_, String>(&sql)
        .fetch_all(pool)
        .await
        .unwrap_or_else(|e| panic!("query failed: {sql}: {e}"))
}

#[tokio::test]
async fn in_list_and_negation() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "city", "operator": "in", "value": ["seoul", "busan"]})).await,
        vec!["alice", "dave"]
    );
    assert_eq!(
        names(&pool, json!({"field": "city", "operator": "NOT in", "value": ["seoul", "busan"]})).await,
        vec!["bob", "carol", "erin"]
    );
}

#[tokio::test]
async fn substring_like_is_case_insensitive() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "city", "operator": "contains", "value": "dae"})).await,
        vec!["bob", "carol", "erin"]
    );
}

#[tokio::test]
async fn substring_glob_is_case_sensitive() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "city", "caseSensitive": true, "operator": "ctns", "value": "dae"})).await,
        vec!["bob", "carol"]
    );
}

#[tokio::test]
async fn substring_wildcards_are_literal() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "city", "operator": "in", "value": "n_2"})).await,
        vec!["erin"]
    );
    // Unescaped, '%%%' would match every row
    assert!(
        names(&pool, json!({"field": "city", "operator": "in", "value": "%"}))
            .await
            .is_empty()
    );
}

#[tokio::test]
async fn like_with_custom_escape() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "city", "operator": "like", "value": "dae%^_%", "escape": "^"})).await,
        vec!["erin"]
    );
}

#[tokio::test]
async fn glob_pattern_verbatim() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "city", "operator": "glob", "value": "d*"})).await,
        vec!["bob", "carol"]
    );
}

#[tokio::test]
async fn between_and_not_between() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "age", "operator": "range", "begin": 20, "end": 30})).await,
        vec!["alice", "erin"]
    );
    assert_eq!(
        names(&pool, json!({"field": "age", "operator": "not between", "begin": 20, "end": 30})).await,
        vec!["bob", "carol", "dave"]
    );
}

#[tokio::test]
async fn comparisons() {
    let pool = setup().await;

    assert_eq!(
        names(&pool, json!({"field": "name", "operator": "NOT eq", "value": "alice"})).await,
        vec!["bob", "carol", "dave", "erin"]
    );
    assert_eq!(
        names(&pool, json!({"field": "active", "operator": "=", "value": true})).await,
        vec!["alice", "carol", "dave"]
    );
    assert_eq!(
        names(&pool, json!({"field": "age", "operator": "gt", "value": 30.5})).await,
        vec!["bob", "dave"]
    );
}

#[tokio::test]
async fn or_and_groups() {
    let pool = setup().await;

    assert_eq!(
        names(
            &pool,
            json!({
                "a": {"field": "city", "operator": "=", "value": "seoul"},
                "b": {"field": "age", "operator": ">", "value": 40}
            })
        )
        .await,
        vec!["alice", "dave"]
    );
    assert_eq!(
        names(
            &pool,
            json!([
                {"field": "active", "operator": "eq", "value": true},
                {"field": "age", "operator": "lt", "value": 30},
                {"field": "ignored", "operator": "unknown", "value": 1}
            ])
        )
        .await,
        vec!["alice", "carol"]
    );
}

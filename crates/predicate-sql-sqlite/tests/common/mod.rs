#![allow(dead_code)]

use predicate_sql_core::{RenderedPredicate, SqlValue};
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions};
use sqlx::{Row, Sqlite};

/// One fixture row of the `events` table.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: i64,
    pub a: i64,
    pub b: i64,
    pub c: String,
}

pub const LETTERS: [&str; 3] = ["x", "y", "z"];

/// Every combination of `a`, `b` in `0..3` and `c` in `LETTERS`, in sort order.
pub fn events() -> Vec<Event> {
    let mut events = Vec::new();
    for a in 0..3 {
        for b in 0..3 {
            for c in LETTERS {
                events.push(Event {
                    id: i64::try_from(events.len()).unwrap() + 1,
                    a,
                    b,
                    c: c.to_string(),
                });
            }
        }
    }
    events
}

/// Opens an in-memory database holding `events()`.
pub async fn fixture() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");

    sqlx::query(
        "CREATE TABLE events (
            id INTEGER PRIMARY KEY,
            a INTEGER NOT NULL,
            b INTEGER NOT NULL,
            c TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("create table");

    for event in events() {
        sqlx::query("INSERT INTO events (id, a, b, c) VALUES (?, ?, ?, ?)")
            .bind(event.id)
            .bind(event.a)
            .bind(event.b)
            .bind(event.c)
            .execute(&pool)
            .await
            .expect("insert event");
    }

    pool
}

/// Runs `SELECT id FROM events WHERE <predicate>` and returns the ids in order.
pub async fn matching_ids(pool: &SqlitePool, predicate: &RenderedPredicate) -> Vec<i64> {
    let sql = format!("SELECT id FROM events WHERE {} ORDER BY id", predicate.sql());
    let mut query = sqlx::query(&sql);
    for param in predicate.params() {
        query = bind_param(query, param.clone());
    }
    query
        .fetch_all(pool)
        .await
        .unwrap_or_else(|e| panic!("query failed: {sql}\nError: {e}"))
        .iter()
        .map(|row| row.get::<i64, _>(0))
        .collect()
}

/// Returns the ids of `events()` satisfying `filter`.
pub fn expected_ids(filter: impl Fn(&Event) -> bool) -> Vec<i64> {
    events().iter().filter(|e| filter(e)).map(|e| e.id).collect()
}

fn bind_param<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
        SqlValue::Array(_) => panic!("SQLite cannot bind an array parameter"),
    }
}

/// Fetches up to `limit` events in `(a, b, c)` order, restricted to
/// `predicate` when given.
pub async fn next_page(
    pool: &SqlitePool,
    predicate: Option<&RenderedPredicate>,
    limit: i64,
) -> Vec<Event> {
    let (filter, params) = match predicate {
        Some(p) => (format!("WHERE {}", p.sql()), p.params().to_vec()),
        None => (String::new(), Vec::new()),
    };
    let sql = format!("SELECT id, a, b, c FROM events {filter} ORDER BY a, b, c LIMIT ?");
    let mut query = sqlx::query(&sql);
    for param in params {
        query = bind_param(query, param);
    }
    query
        .bind(limit)
        .fetch_all(pool)
        .await
        .unwrap_or_else(|e| panic!("query failed: {sql}\nError: {e}"))
        .iter()
        .map(|row| Event {
            id: row.get("id"),
            a: row.get("a"),
            b: row.get("b"),
            c: row.get("c"),
        })
        .collect()
}

//! Shared fixtures: a seeded in-memory SQLite dataset and request helpers.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;
use vulgate_api::ensure_tables;

pub const GENESIS_LATIN: &str = "In principio creavit Deus caelum et terram";
pub const GENESIS_ENGLISH: &str = "In the beginning God created heaven and earth";

const SEED: &[&str] = &[
    "INSERT INTO editions (eid, name, date, info) VALUES (1, 'Clementine', '1592', 'Sixto-Clementine Vulgate')",
    "INSERT INTO books (bid, number, short, long, alt, tag, blurb, testament, edition) \
     VALUES (1, 1, 'Gen', 'Genesis', 'Liber Genesis', 'gn', 'The book of origins', 'Old', '1')",
    "INSERT INTO books (bid, number, short, long, alt, tag, blurb, testament, edition) \
     VALUES (2, 2, 'Ex', 'Exodus', NULL, 'ex', NULL, 'Old', '1')",
    "INSERT INTO chapters (cid, number, book, header) VALUES (1, 1, 1, 'In principio')",
    "INSERT INTO chapters (cid, number, book, header) VALUES (2, 1, 2, 'Haec sunt nomina')",
    "INSERT INTO chapters (cid, number, book, header) VALUES (4, 2, 2, NULL)",
    "INSERT INTO verses (vid, number, book, chapter, latin, english, commentary) \
     VALUES (1, 1, 1, 1, 'In principio creavit Deus caelum et terram', 'In the beginning God created heaven and earth', NULL)",
    "INSERT INTO verses (vid, number, book, chapter, latin, english, commentary) \
     VALUES (2, 2, 1, 1, 'Terra autem erat inanis et vacua', 'And the earth was void and empty', NULL)",
    "INSERT INTO verses (vid, number, book, chapter, latin, english, commentary) \
     VALUES (3, 1, 2, 2, 'Haec sunt nomina filiorum Israel', 'These are the names of the children of Israel', NULL)",
    "INSERT INTO verses (vid, number, book, chapter, latin, english, commentary) \
     VALUES (4, 1, 2, 4, 'Surrexit interea rex novus', 'In the mean time there arose a new king', 'Pharao')",
];

/// Single-connection in-memory pool so every query sees the same database.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    ensure_tables(&pool).await.unwrap();
    for stmt in SEED {
        sqlx::query(stmt).execute(&pool).await.unwrap();
    }
    pool
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

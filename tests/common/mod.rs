//! Shared fixtures for endpoint tests
//!
//! Each fixture is a real SQLite file in a temp directory, written with a
//! separate read-write connection and then opened read-only by the service.

#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use platewise::http_server::server::build_router;
use platewise::query::Database;
use rusqlite::Connection;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SCHEMA: &str = "
    CREATE TABLE restaurants (
        id INTEGER PRIMARY KEY,
        name TEXT,
        cuisine TEXT,
        isVeg INTEGER,
        rating REAL,
        priceForTwo INTEGER,
        location TEXT,
        hasOutdoorSeating INTEGER,
        isLuxury INTEGER
    );
    CREATE TABLE dishes (
        id INTEGER PRIMARY KEY,
        name TEXT,
        price REAL,
        rating REAL,
        isVeg INTEGER
    );
";

pub const SEED: &str = "
    INSERT INTO restaurants VALUES
        (1, 'Spice Kitchen', 'Indian', 1, 4.5, 1500, 'MG Road', 1, 0),
        (2, 'Olive Bistro', 'Italian', 0, 4.1, 2000, 'Jubilee Hills', 0, 1),
        (3, 'Green Leaf', 'Indian', 1, 4.8, 800, 'Banjara Hills', 1, 0),
        (4, 'Sakura', 'Japanese', 0, 3.9, 2500, 'Hitech City', 1, 1),
        (5, 'Curry Leaf', 'Indian', 1, 4.2, 900, 'Gachibowli', 0, 0);
    INSERT INTO dishes VALUES
        (1, 'Paneer Butter Masala', 250, 4.5, 1),
        (2, 'Chicken Alfredo Pasta', 300, 4.0, 0),
        (3, 'Veg Sushi Roll', 180, 4.2, 1),
        (4, 'Lamb Biryani', 350, 4.7, 0);
";

/// A database file plus the temp directory that owns it
pub struct Fixture {
    pub dir: TempDir,
    pub db: Database,
}

impl Fixture {
    pub fn router(&self) -> Router {
        build_router(self.db.clone())
    }
}

fn write_database(path: &Path, sql: &str) {
    let conn = Connection::open(path).expect("Failed to create fixture database");
    conn.execute_batch(sql).expect("Failed to seed fixture database");
}

fn fixture_with(sql: &str) -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("database.sqlite");
    write_database(&path, sql);
    let db = Database::open(&path).expect("Failed to open fixture database");
    Fixture { dir, db }
}

/// Schema with sample restaurants and dishes
pub fn seeded() -> Fixture {
    fixture_with(&format!("{SCHEMA}{SEED}"))
}

/// Schema with both tables empty
pub fn empty() -> Fixture {
    fixture_with(SCHEMA)
}

/// GET `uri` and decode the JSON body
pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri).await
}

pub async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}

pub fn numbers(rows: &Value, column: &str) -> Vec<f64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| row[column].as_f64().unwrap())
        .collect()
}

//! # Query Layer
//!
//! Owns the single read-only SQLite connection and exposes typed,
//! positionally-bound query operations over the `restaurants` and
//! `dishes` tables.
//!
//! Only the static identifiers of [`Table`] and [`Column`] are ever written
//! into SQL text. Caller-supplied values are always bound as parameters.

mod database;
mod errors;
mod row;
mod table;

pub use database::Database;
pub use errors::{QueryError, QueryResult};
pub use row::Row;
pub use rusqlite::types::Value as SqlValue;
pub use table::{Column, SortDirection, Table};

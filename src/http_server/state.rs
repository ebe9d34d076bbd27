//! Shared handler state

use crate::query::Database;

/// State injected into every route handler
pub struct QueryState {
    pub db: Database,
}

impl QueryState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

//! # Database Handle
//!
//! One SQLite connection for the whole process, shared by every request.
//! Each operation runs its blocking SQLite call on the tokio blocking pool.
//! The connection sits behind a `Mutex` because `rusqlite::Connection` is
//! not `Sync`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params_from_iter, Connection, OpenFlags, OptionalExtension};

use super::errors::{QueryError, QueryResult};
use super::row::{self, Row};
use super::table::{select_sql, Column, SortDirection, Table};
use super::SqlValue;

/// Connection state behind the handle
#[derive(Debug)]
enum Handle {
    Open(Connection),
    Unavailable(String),
}

/// Shared, cloneable handle to the embedded database
///
/// Constructed once at startup and injected into the HTTP router state.
#[derive(Clone, Debug)]
pub struct Database {
    handle: Arc<Mutex<Handle>>,
}

impl Database {
    /// Open an existing database file read-only.
    ///
    /// The schema is owned externally; this only checks that the file is a
    /// readable SQLite database.
    pub fn open(path: impl AsRef<Path>) -> QueryResult<Self> {
        let path = path.as_ref();
        let connect_err = |source| QueryError::Connect {
            path: path.display().to_string(),
            source,
        };

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(connect_err)?;

        conn.query_row("SELECT count(*) FROM sqlite_master", [], |r| {
            r.get::<_, i64>(0)
        })
        .map_err(connect_err)?;

        Ok(Self::from_connection(conn))
    }

    /// Wrap an already-open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            handle: Arc::new(Mutex::new(Handle::Open(conn))),
        }
    }

    /// A handle with no connection; every query fails with
    /// [`QueryError::Unavailable`] carrying `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            handle: Arc::new(Mutex::new(Handle::Unavailable(reason.into()))),
        }
    }

    /// Whether a connection is currently held
    pub fn is_available(&self) -> bool {
        matches!(self.handle.lock().as_deref(), Ok(Handle::Open(_)))
    }

    /// Drop the connection. Clones of this handle see the closed state.
    pub fn close(&self) -> QueryResult<()> {
        let mut guard = self.handle.lock().map_err(|_| QueryError::Poisoned)?;
        let previous = std::mem::replace(
            &mut *guard,
            Handle::Unavailable("database closed".to_string()),
        );
        if let Handle::Open(conn) = previous {
            conn.close().map_err(|(_, e)| QueryError::Sqlite(e))?;
        }
        Ok(())
    }

    /// All rows of `table` in natural storage order
    pub async fn fetch_all(&self, table: Table) -> QueryResult<Vec<Row>> {
        self.get_by_predicate(table, Vec::new()).await
    }

    /// The row of `table` whose `id` equals `id`, if any
    pub async fn get_by_id(&self, table: Table, id: i64) -> QueryResult<Option<Row>> {
        let sql = select_sql(table, &[Column::Id], None);
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let columns = column_names(&stmt);
            let row = stmt
                .query_row([id], |r| row::from_sqlite(r, &columns))
                .optional()?;
            Ok(row)
        })
        .await
    }

    /// All rows of `table` where `column` equals `value`
    pub async fn get_by_column(
        &self,
        table: Table,
        column: Column,
        value: SqlValue,
    ) -> QueryResult<Vec<Row>> {
        self.get_by_predicate(table, vec![(column, value)]).await
    }

    /// All rows of `table` matching every `column = value` condition.
    /// No conditions matches every row.
    pub async fn get_by_predicate(
        &self,
        table: Table,
        conditions: Vec<(Column, SqlValue)>,
    ) -> QueryResult<Vec<Row>> {
        let (columns, values): (Vec<Column>, Vec<SqlValue>) = conditions.into_iter().unzip();
        let sql = select_sql(table, &columns, None);
        self.with_connection(move |conn| query_rows(conn, &sql, values))
            .await
    }

    /// All rows of `table` ordered by `column`
    pub async fn get_sorted(
        &self,
        table: Table,
        column: Column,
        direction: SortDirection,
    ) -> QueryResult<Vec<Row>> {
        let sql = select_sql(table, &[], Some((column, direction)));
        self.with_connection(move |conn| query_rows(conn, &sql, Vec::new()))
            .await
    }

    async fn with_connection<T, F>(&self, f: F) -> QueryResult<T>
    where
        F: FnOnce(&Connection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let handle = Arc::clone(&self.handle);
        tokio::task::spawn_blocking(move || {
            let guard = handle.lock().map_err(|_| QueryError::Poisoned)?;
            match &*guard {
                Handle::Open(conn) => f(conn),
                Handle::Unavailable(reason) => Err(QueryError::Unavailable(reason.clone())),
            }
        })
        .await
        .map_err(|e| QueryError::Task(e.to_string()))?
    }
}

fn column_names(stmt: &rusqlite::Statement<'_>) -> Vec<String> {
    stmt.column_names().into_iter().map(String::from).collect()
}

fn query_rows(conn: &Connection, sql: &str, values: Vec<SqlValue>) -> QueryResult<Vec<Row>> {
    let mut stmt = conn.prepare(sql)?;
    let columns = column_names(&stmt);
    let rows = stmt
        .query_map(params_from_iter(values), |r| row::from_sqlite(r, &columns))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

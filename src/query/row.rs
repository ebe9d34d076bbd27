//! Row conversion
//!
//! A row is a JSON object keyed by column name, in select order. Columns
//! the service does not know about are passed through untouched.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rusqlite::types::ValueRef;
use serde_json::{Map, Number, Value};

/// One record from a table
pub type Row = Map<String, Value>;

/// Convert the current SQLite row into a [`Row`]
pub(crate) fn from_sqlite(row: &rusqlite::Row<'_>, columns: &[String]) -> rusqlite::Result<Row> {
    let mut record = Map::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        record.insert(name.clone(), to_json(row.get_ref(idx)?));
    }
    Ok(record)
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::from(v),
        // NaN and infinities have no JSON form
        ValueRef::Real(v) => Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::String(STANDARD.encode(bytes)),
    }
}

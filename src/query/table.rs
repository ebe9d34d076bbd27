//! Table and column identifiers
//!
//! Identifiers cannot be bound as SQL parameters, so every identifier that
//! reaches SQL text comes from one of these closed enums.

use std::fmt;

/// Tables served by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Restaurants,
    Dishes,
}

impl Table {
    /// SQL identifier of the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Restaurants => "restaurants",
            Table::Dishes => "dishes",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Columns the service filters or sorts on
///
/// Other columns are never named in SQL; they come back through `SELECT *`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Cuisine,
    Rating,
    IsVeg,
    HasOutdoorSeating,
    IsLuxury,
    Price,
}

impl Column {
    /// SQL identifier of the column
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Cuisine => "cuisine",
            Column::Rating => "rating",
            Column::IsVeg => "isVeg",
            Column::HasOutdoorSeating => "hasOutdoorSeating",
            Column::IsLuxury => "isLuxury",
            Column::Price => "price",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for `ORDER BY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// Build a `SELECT *` statement with one `column = ?` placeholder per
/// condition (joined with `AND`) and an optional `ORDER BY`.
pub(crate) fn select_sql(
    table: Table,
    conditions: &[Column],
    order: Option<(Column, SortDirection)>,
) -> String {
    let mut sql = format!("SELECT * FROM {}", table.as_str());

    if !conditions.is_empty() {
        let clauses: Vec<String> = conditions
            .iter()
            .map(|column| format!("{} = ?", column.as_str()))
            .collect();
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    if let Some((column, direction)) = order {
        sql.push_str(&format!(" ORDER BY {} {}", column.as_str(), direction.as_sql()));
    }

    sql
}

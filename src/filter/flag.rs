//! Boolean flag parameters

use std::collections::HashMap;

use crate::query::{Column, SqlValue};

use super::errors::{FilterError, FilterResult};

/// A boolean column value as accepted on the query string
///
/// Stored in the database as `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolFlag {
    Yes,
    No,
}

impl BoolFlag {
    /// Accepts `1`, `0`, `true`, `false` (ASCII case-insensitive)
    pub fn parse(param: &'static str, raw: &str) -> FilterResult<Self> {
        let token = raw.trim();
        if token == "1" || token.eq_ignore_ascii_case("true") {
            Ok(BoolFlag::Yes)
        } else if token == "0" || token.eq_ignore_ascii_case("false") {
            Ok(BoolFlag::No)
        } else {
            Err(FilterError::InvalidValue {
                param,
                value: raw.to_string(),
            })
        }
    }

    /// Value bound against the 0/1 column
    pub fn to_sql(self) -> SqlValue {
        match self {
            BoolFlag::Yes => SqlValue::Integer(1),
            BoolFlag::No => SqlValue::Integer(0),
        }
    }
}

/// How absent parameters are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    /// Every parameter must be present
    RequireAll,
    /// Absent parameters place no constraint on their column
    OptionalEach,
}

/// A set of flag parameters mapped onto columns
#[derive(Debug, Clone, Copy)]
pub struct FlagFilter {
    mode: ParamMode,
    params: &'static [(&'static str, Column)],
}

impl FlagFilter {
    pub const fn new(mode: ParamMode, params: &'static [(&'static str, Column)]) -> Self {
        Self { mode, params }
    }

    /// Build equality conditions from the query string, in declaration order
    pub fn conditions(
        &self,
        query: &HashMap<String, String>,
    ) -> FilterResult<Vec<(Column, SqlValue)>> {
        let mut conditions = Vec::with_capacity(self.params.len());

        for &(param, column) in self.params {
            match (query.get(param), self.mode) {
                (Some(raw), _) => {
                    conditions.push((column, BoolFlag::parse(param, raw)?.to_sql()));
                }
                (None, ParamMode::RequireAll) => {
                    return Err(FilterError::MissingParameter(param));
                }
                (None, ParamMode::OptionalEach) => {}
            }
        }

        Ok(conditions)
    }
}

//! # Flag Filters
//!
//! Parses the boolean query parameters of the filter endpoints into
//! predicate conditions for the query layer.
//!
//! Each endpoint declares whether its parameters are all required
//! ([`ParamMode::RequireAll`]) or individually optional
//! ([`ParamMode::OptionalEach`]).

mod errors;
mod flag;

pub use errors::{FilterError, FilterResult};
pub use flag::{BoolFlag, FlagFilter, ParamMode};

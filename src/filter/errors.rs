//! # Filter Errors

use thiserror::Error;

/// Result type for filter parsing
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while turning query parameters into conditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A flag parameter carried an unrecognized token
    #[error("Invalid value for {param}: {value}")]
    InvalidValue { param: &'static str, value: String },

    /// A parameter required by [`super::ParamMode::RequireAll`] was absent
    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),
}

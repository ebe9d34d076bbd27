//! # API Errors
//!
//! Maps query and filter failures onto the service's status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::filter::FilterError;
use crate::query::QueryError;

use super::response::MessageResponse;

/// Error text of a 500 response, picked up by the request logger
#[derive(Debug, Clone)]
pub struct InternalFailure(pub String);

/// Handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 with a route-specific message
    #[error("{0}")]
    NotFound(&'static str),

    /// 400
    #[error("{0}")]
    InvalidInput(String),

    /// 500 carrying the raw error text
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::InvalidValue { .. } => ApiError::InvalidInput(err.to_string()),
            // Missing restaurant filter parameters are a server fault, not a 400
            FilterError::MissingParameter(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let failure = matches!(self, ApiError::Internal(_))
            .then(|| InternalFailure(message.clone()));

        let mut response = (status, Json(MessageResponse { message })).into_response();
        if let Some(failure) = failure {
            response.extensions_mut().insert(failure);
        }
        response
    }
}

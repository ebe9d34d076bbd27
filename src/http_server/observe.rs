//! Request logging middleware
//!
//! Logs one `REQUEST_COMPLETED` event per response, plus `QUERY_FAILED`
//! for responses built from an internal error.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

use crate::observability::Logger;

use super::errors::InternalFailure;

pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;

    if let Some(InternalFailure(error)) = response.extensions().get::<InternalFailure>() {
        Logger::error(
            "QUERY_FAILED",
            &[
                ("error", error.as_str()),
                ("path", path.as_str()),
                ("request_id", request_id.as_str()),
            ],
        );
    }

    let duration_ms = started_at.elapsed().as_millis().to_string();
    Logger::info(
        "REQUEST_COMPLETED",
        &[
            ("duration_ms", duration_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", response.status().as_str()),
        ],
    );

    response
}

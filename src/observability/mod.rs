//! # Observability
//!
//! Structured JSON logging for service lifecycle and request events.
//!
//! Events emitted by the service:
//! - `DATABASE_CONNECTED` / `DATABASE_CONNECT_FAILED` / `DATABASE_CLOSED`
//! - `SERVER_LISTENING` / `SERVER_STOPPED`
//! - `REQUEST_COMPLETED`
//! - `QUERY_FAILED`

mod logger;

pub use logger::{Logger, Severity};

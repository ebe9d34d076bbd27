//! platewise - read-only HTTP query service over restaurants and dishes
//!
//! Requests are routed by [`http_server`], parameters are parsed by
//! [`filter`], and every lookup goes through the single connection held by
//! [`query::Database`].

pub mod cli;
pub mod filter;
pub mod http_server;
pub mod observability;
pub mod query;

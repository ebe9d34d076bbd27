//! # HTTP Server
//!
//! Combines the restaurant and dish routers behind permissive CORS and
//! request logging, and runs them until a shutdown signal arrives.

use std::future::Future;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::query::Database;

use super::config::HttpServerConfig;
use super::dish_routes::dish_routes;
use super::errors::ApiError;
use super::observe::log_request;
use super::restaurant_routes::restaurant_routes;
use super::state::QueryState;

const ROUTE_NOT_FOUND: &str = "Route not found";

/// HTTP server for the query endpoints
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already-constructed database handle
    pub fn new(config: HttpServerConfig, db: Database) -> Self {
        let router = build_router(db);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let local_addr = listener.local_addr()?.to_string();
        let url = format!("http://{}", local_addr);

        Logger::info(
            "SERVER_LISTENING",
            &[("addr", local_addr.as_str()), ("url", url.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(db: Database) -> Router {
    let state = Arc::new(QueryState::new(db));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(restaurant_routes(state.clone()))
        .merge(dish_routes(state))
        .fallback(route_not_found)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
}

/// Unknown paths and non-GET methods
pub(crate) async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND)
}

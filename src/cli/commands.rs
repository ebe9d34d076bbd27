//! CLI command implementations
//!
//! `serve` boot sequence:
//! 1. Resolve configuration (environment, then flags)
//! 2. Open the database, or continue with an unavailable handle
//! 3. Serve HTTP until Ctrl-C
//! 4. Close the database

use std::future::Future;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::query::Database;

use super::args::{Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
    }
}

/// Apply flag overrides on top of an environment-derived config
pub fn resolve_config(base: HttpServerConfig, args: ServeArgs) -> HttpServerConfig {
    HttpServerConfig {
        host: args.host.unwrap_or(base.host),
        port: args.port.unwrap_or(base.port),
        database_path: args.database.unwrap_or(base.database_path),
        require_database: base.require_database || args.require_database,
    }
}

/// Open the configured database.
///
/// A failure is logged and, unless the database is required, replaced by an
/// unavailable handle so the server still answers (with 500s).
fn open_database(config: &HttpServerConfig) -> CliResult<Database> {
    let path = config.database_path.display().to_string();

    match Database::open(&config.database_path) {
        Ok(db) => {
            Logger::info("DATABASE_CONNECTED", &[("path", path.as_str())]);
            Ok(db)
        }
        Err(e) if config.require_database => Err(e.into()),
        Err(e) => {
            let reason = e.to_string();
            Logger::error(
                "DATABASE_CONNECT_FAILED",
                &[("error", reason.as_str()), ("path", path.as_str())],
            );
            Ok(Database::unavailable(reason))
        }
    }
}

/// Run the HTTP server until Ctrl-C
pub fn serve(args: ServeArgs) -> CliResult<()> {
    let config = resolve_config(HttpServerConfig::from_env()?, args);
    let db = open_database(&config)?;

    serve_until(config, db, async {
        let _ = tokio::signal::ctrl_c().await;
    })?;

    Logger::info("SERVER_STOPPED", &[]);
    Ok(())
}

/// Serve until `shutdown` resolves. The database is closed whether the
/// server stopped cleanly or failed to start.
fn serve_until<F>(config: HttpServerConfig, db: Database, shutdown: F) -> CliResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = run_server(HttpServer::new(config, db.clone()), shutdown);
    let closed = db.close().map_err(CliError::from);
    if closed.is_ok() {
        Logger::info("DATABASE_CLOSED", &[]);
    }

    served.and(closed)
}

fn run_server<F>(server: HttpServer, shutdown: F) -> CliResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start_with_shutdown(shutdown)
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

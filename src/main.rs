//! platewise entry point
//!
//! Parses CLI arguments and dispatches via `cli::run`. On failure the error
//! is logged and the process exits with status 1.

use platewise::cli;
use platewise::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal(
            "STARTUP_FAILED",
            &[("code", e.code().code()), ("error", e.message())],
        );
        std::process::exit(1);
    }
}

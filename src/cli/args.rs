//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// platewise - read-only restaurant and dish query service
#[derive(Parser, Debug)]
#[command(name = "platewise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Overrides for values otherwise read from the environment
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default: $PORT or 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite database file (default: $DATABASE_PATH or ./database.sqlite)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Exit instead of serving when the database cannot be opened
    #[arg(long)]
    pub require_database: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! # Product Gateway CLI (`pgw`)
//!
//! The `pgw` binary starts the HTTP server and provides console commands for
//! inspecting the upstream feed.
//!
//! ## Usage
//!
//! ```bash
//! pgw --config ./config/product-gateway.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pgw serve` | Start the HTTP server on `[server].bind` |
//! | `pgw source` | Check upstream availability and print a catalog summary |
//! | `pgw facets` | Fetch the catalog and print the derived facets |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use product_gateway::{config, report, server};

/// Product Gateway — serves filtered, annotated views of a remote product
/// catalog.
#[derive(Parser)]
#[command(
    name = "pgw",
    about = "Product Gateway — serves filtered, annotated views of a remote product catalog",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/product-gateway.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Serves `GET /filter` and `GET /health` on the configured bind
    /// address. The catalog is fetched lazily on the first request and
    /// cached for the life of the process.
    Serve,

    /// Check upstream availability.
    ///
    /// Performs a fresh fetch against the configured feed and prints its
    /// status and product count. Exits nonzero when the feed is down.
    Source,

    /// Print the catalog facets.
    ///
    /// Fetches the catalog and prints the derived size set and keyword
    /// list, as a request to `/filter` would report them.
    Facets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Serve => server::run_server(&config).await,
        Commands::Source => report::run_source(&config).await,
        Commands::Facets => report::run_facets(&config).await,
    }
}

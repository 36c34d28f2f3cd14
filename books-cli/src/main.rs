//! Books CLI - serve the catalog API or query it from the command line

mod commands;

use anyhow::Result;
use books_server::config::{parse_addr, ServerConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "books")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (overrides BOOKS_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Mode to run; starts the HTTP server when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listen address (overrides BOOKS_ADDR)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Search books by title, author or genre
    Search {
        /// Field to match (title, author, genre)
        field: String,

        /// Case-insensitive substring to look for
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Insert sample books
    Simulate {
        /// Number of books to create
        n: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "books_cli=debug,books_server=debug,books_core=debug,tower_http=debug"
    } else {
        "books_cli=info,books_server=info,books_core=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ServerConfig::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    match cli.command.unwrap_or(Commands::Serve { addr: None }) {
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                config.addr = parse_addr(&addr)?;
            }
            commands::serve(config).await
        }

        Commands::Search { field, value, json } => {
            commands::search(&config.db_path, &field, &value, json).await
        }

        Commands::Simulate { n } => commands::simulate(&config.db_path, n).await,
    }
}

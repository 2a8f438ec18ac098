//! Brewdex CLI - Database migrations and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! brewdex-cli migrate
//!
//! # Load cafes from a YAML file, skipping names already present
//! brewdex-cli seed seed/cafes.yaml --skip-existing
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Load cafe records from a YAML file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "brewdex-cli")]
#[command(author, version, about = "Brewdex CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Load cafe records from a YAML file
    Seed {
        /// Path to the YAML seed file
        file: String,

        /// Skip cafes whose name already exists instead of aborting
        #[arg(long)]
        skip_existing: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brewdex_cli=info,brewdex_api=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed {
            file,
            skip_existing,
        } => commands::seed::run(&file, skip_existing).await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

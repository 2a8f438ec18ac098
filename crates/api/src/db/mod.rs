//! Database operations for the Brewdex SQLite store.
//!
//! # Database
//!
//! A single file-backed SQLite database holding one table:
//!
//! - `cafe` - The cafe directory (see `migrations/0001_create_cafe.sql`)
//!
//! # Migrations
//!
//! Migrations are embedded at compile time from `crates/api/migrations/` and
//! run automatically on server startup, so the schema exists before the first
//! request. They can also be run explicitly:
//! ```bash
//! cargo run -p brewdex-cli -- migrate
//! ```

pub mod cafes;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use cafes::CafeRepository;

/// Embedded migrations for the cafe database.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., duplicate cafe name).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Requested record was not found.
    #[error("not found")]
    NotFound,

    /// Caller-supplied value was rejected before touching the store.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The store holds no records at all.
    #[error("store is empty")]
    Empty,
}

/// Create a SQLite connection pool with sensible defaults.
///
/// The database file is created if missing; WAL mode keeps readers from
/// blocking the single writer SQLite allows.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

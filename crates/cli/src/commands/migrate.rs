//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! brewdex-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `BREWDEX_DATABASE_URL` - SQLite connection string (fallback:
//!   `DATABASE_URL`)

use secrecy::SecretString;
use tracing::info;

use brewdex_api::db;

/// Apply the embedded migrations to the configured database.
///
/// The server also migrates at startup; this command exists for running
/// migrations ahead of a deploy or against a fresh database file.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails, or
/// a migration cannot be applied.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    info!("Connecting to database");
    let pool = db::create_pool(&database_url).await?;

    info!("Running migrations");
    db::MIGRATOR.run(&pool).await?;

    pool.close().await;
    info!("Migrations complete");
    Ok(())
}

/// Resolve the database URL from the environment.
pub(crate) fn database_url() -> Result<SecretString, Box<dyn std::error::Error>> {
    if let Ok(value) = std::env::var("BREWDEX_DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err("BREWDEX_DATABASE_URL not set".into())
}

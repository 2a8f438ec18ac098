//! Integration tests for Brewdex.
//!
//! The tests in `tests/` drive a live server over HTTP, so they are marked
//! `#[ignore]` and only run when one is available.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server with a throwaway database
//! BREWDEX_DATABASE_URL=sqlite://target/it-cafes.db \
//!     BREWDEX_API_KEY=3d6f45a5fc12445dbac2f59c3b6c7cb1 \
//!     cargo run -p brewdex-api &
//!
//! # Run the live tests against it
//! BREWDEX_API_KEY=3d6f45a5fc12445dbac2f59c3b6c7cb1 \
//!     cargo test -p brewdex-integration-tests -- --ignored
//! ```

/// Base URL of the server under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("BREWDEX_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_owned())
}

/// API key the server under test was started with.
#[must_use]
pub fn api_key() -> String {
    std::env::var("BREWDEX_API_KEY")
        .unwrap_or_else(|_| "3d6f45a5fc12445dbac2f59c3b6c7cb1".to_owned())
}

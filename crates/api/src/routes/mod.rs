//! HTTP route handlers for the cafe API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                        - Index page (HTML)
//! GET    /health                  - Liveness check
//! GET    /health/ready            - Readiness check (verifies database)
//!
//! # Cafes (all parameters via query string, on every verb)
//! GET    /all                     - Every cafe, sorted by name
//! GET    /random                  - One cafe, picked at random
//! GET    /search?loc=...          - Cafes at an exact location
//! POST   /add?name=...&...        - Create a cafe
//! PATCH  /update-price/{id}?new_price=...       - Update one coffee price
//! PUT    /update-price/{id}?new_price=...       - Same handler as PATCH
//! DELETE /report-closed/{id}?api_key=...        - Delete a cafe (API key gated)
//! ```

pub mod cafes;
pub mod home;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create all routes for the cafe API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/all", get(cafes::all))
        .route("/random", get(cafes::random))
        .route("/search", get(cafes::search))
        .route("/add", post(cafes::add))
        .route(
            "/update-price/{id}",
            patch(cafes::update_price).put(cafes::update_price),
        )
        .route("/report-closed/{id}", delete(cafes::report_closed))
}

//! Cafe route handlers.
//!
//! Every handler is a stateless translation layer: parse query-string
//! parameters, call exactly one [`CafeRepository`] operation, serialize the
//! result or error to JSON. Inputs are read from the query string on ALL
//! verbs - POST, PATCH and DELETE included - which is the directory's
//! long-standing wire contract; request bodies are ignored.

use axum::Json;
use axum::extract::{Path, Query, State};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use brewdex_core::{Amenities, CafeId};

use crate::db::CafeRepository;
use crate::error::{ApiError, Result};
use crate::models::cafe::NewCafe;
use crate::state::AppState;

/// Query parameters for `POST /add`.
///
/// Everything is optional at the parsing layer; presence checks happen in the
/// handler so a missing field produces a named 400 instead of a rejection.
#[derive(Debug, Deserialize)]
pub struct AddCafeParams {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
    pub has_sockets: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub can_take_calls: Option<String>,
}

/// Query parameters for `PATCH /update-price/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePriceParams {
    pub new_price: Option<String>,
}

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub loc: Option<String>,
}

/// Query parameters for `DELETE /report-closed/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReportClosedParams {
    pub api_key: Option<String>,
}

/// Interpret a boolean query parameter as present-and-non-empty.
///
/// Any non-empty value maps to `true` - including the literal text `"false"`.
/// Absence or the empty string maps to `false`. This mirrors the directory's
/// historical wire contract, which clients depend on; send the parameter only
/// when the flag should be set.
fn flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Presence check for a required text parameter.
fn require(value: Option<String>, field: &'static str) -> Result<String> {
    value.ok_or_else(|| ApiError::BadRequest(format!("Missing required field: {field}")))
}

/// `POST /add` - create a cafe from query-string parameters.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Query(params): Query<AddCafeParams>,
) -> Result<Json<Value>> {
    let new_cafe = NewCafe {
        name: require(params.name, "name")?,
        map_url: require(params.map_url, "map_url")?,
        img_url: require(params.img_url, "img_url")?,
        location: require(params.location, "location")?,
        seats: require(params.seats, "seats")?,
        amenities: Amenities {
            has_toilet: flag(params.has_toilet.as_deref()),
            has_wifi: flag(params.has_wifi.as_deref()),
            has_sockets: flag(params.has_sockets.as_deref()),
            can_take_calls: flag(params.can_take_calls.as_deref()),
        },
        coffee_price: require(params.coffee_price, "coffee_price")?,
    };

    let cafe = CafeRepository::new(state.pool()).create(&new_cafe).await?;
    tracing::info!(id = %cafe.id, name = %cafe.name, "Cafe created");

    Ok(Json(
        json!({ "response": { "success": "Successfully added new data" } }),
    ))
}

/// `PATCH /update-price/{id}` (also served for PUT) - overwrite one coffee
/// price.
#[instrument(skip(state))]
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UpdatePriceParams>,
) -> Result<Json<Value>> {
    let new_price = params.new_price.unwrap_or_default();
    if new_price.is_empty() {
        return Err(ApiError::BadRequest("Price not provided".to_owned()));
    }

    let cafe = CafeRepository::new(state.pool())
        .update_price(CafeId::new(id), &new_price)
        .await?;
    tracing::info!(id = %cafe.id, new_price = %cafe.coffee_price, "Coffee price updated");

    Ok(Json(json!({
        "message": format!("Price for Cafe {id} updated successfully"),
        "new_price": cafe.coffee_price,
    })))
}

/// `GET /random` - one cafe, picked uniformly at random.
#[instrument(skip(state))]
pub async fn random(State(state): State<AppState>) -> Result<Json<Value>> {
    let cafe = CafeRepository::new(state.pool()).get_random().await?;
    Ok(Json(json!({ "cafe": cafe })))
}

/// `GET /all` - every cafe, sorted by name ascending.
#[instrument(skip(state))]
pub async fn all(State(state): State<AppState>) -> Result<Json<Value>> {
    let cafes = CafeRepository::new(state.pool()).list_all().await?;
    Ok(Json(json!({ "cafes": cafes })))
}

/// `GET /search?loc=...` - cafes whose location exactly equals `loc`.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>> {
    let loc = params.loc.unwrap_or_default();
    if loc.is_empty() {
        return Err(ApiError::BadRequest(
            "Location parameter (loc) is required".to_owned(),
        ));
    }

    let cafes = CafeRepository::new(state.pool())
        .find_by_location(&loc)
        .await?;
    if cafes.is_empty() {
        return Err(ApiError::NotFound(format!(
            "Sorry we don't have coffee at location: {loc}"
        )));
    }

    Ok(Json(json!({ "cafes": cafes })))
}

/// `DELETE /report-closed/{id}?api_key=...` - permanently remove a cafe.
///
/// The key is checked before the store is touched, so a wrong key never
/// reveals whether the id exists.
#[instrument(skip(state, params))]
pub async fn report_closed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ReportClosedParams>,
) -> Result<Json<Value>> {
    let provided = params.api_key.unwrap_or_default();
    if provided.as_str() != state.config().api_key.expose_secret() {
        return Err(ApiError::Forbidden("Incorrect API key.".to_owned()));
    }

    CafeRepository::new(state.pool())
        .delete(CafeId::new(id))
        .await?;
    tracing::info!(id, "Cafe deleted");

    Ok(Json(
        json!({ "response": { "success": "Cafe successfully deleted." } }),
    ))
}

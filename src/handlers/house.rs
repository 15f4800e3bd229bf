//! House handlers: add, remove, update, query.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::HouseFilter;
use crate::response::{created_ok, message_ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

/// POST /house/add: validate, assign a uid, persist.
pub async fn add(State(state): State<AppState>, body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let body = body.require()?;
    let new = RequestValidator::new_house(&body)?;
    let uid = state.store.create(new).await?;
    Ok(created_ok("House added successfully", uid))
}

/// POST /house/remove: remove the House with its Rooms and their Devices.
pub async fn remove(State(state): State<AppState>, body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let uid = RequestValidator::uid(body.as_map())?;
    state.store.remove(&uid).await?;
    Ok(message_ok(format!("House with uid={} removed", uid)))
}

/// POST /house/update: overwrite supplied fields; the uid only selects the record.
pub async fn update(State(state): State<AppState>, body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let uid = RequestValidator::uid(body.as_map())?;
    let patch = RequestValidator::house_patch(&body.or_empty())?;
    state.store.update(&uid, patch).await?;
    Ok(message_ok(format!("House with uid={} updated", uid)))
}

/// GET /house/query: filters from the query string.
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = HouseFilter::from_params(&params);
    Ok(Json(state.store.query(&filter).await?))
}

/// POST /house/query: filters from the JSON body; no body means no filter.
pub async fn query_body(State(state): State<AppState>, body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let filter = HouseFilter::from_json(&body.or_empty());
    Ok(Json(state.store.query(&filter).await?))
}

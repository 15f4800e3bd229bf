//! Room handlers. Rooms are validated and acknowledged but not persisted here;
//! the Room document is only rewritten by the House cascade.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::RoomQuery;
use crate::response::{message_ok, query_echo};
use crate::service::RequestValidator;
use axum::{extract::Query, response::IntoResponse};
use serde_json::{Map, Value};

const KEY: [&str; 2] = ["name", "belong_to_house"];

pub async fn add(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let body = body.require()?;
    RequestValidator::require_each(&body, &["name", "belong_to_house", "size", "floor"])?;
    Ok(message_ok("Room added successfully"))
}

pub async fn remove(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &KEY)?;
    let body = body.or_empty();
    Ok(message_ok(format!(
        "Room {} removed from house {}",
        text(&body, "name"),
        text(&body, "belong_to_house")
    )))
}

pub async fn update(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &KEY)?;
    Ok(message_ok(format!("Room {} updated", text(&body.or_empty(), "name"))))
}

/// Room lookups need both a non-empty name and house.
pub async fn query(Query(params): Query<RoomQuery>) -> Result<impl IntoResponse, AppError> {
    let filled = |v: &Option<String>| v.as_deref().map_or(false, |s| !s.is_empty());
    if !(filled(&params.name) && filled(&params.belong_to_house)) {
        return Err(lookup_key_required());
    }
    Ok(query_echo("Room query result", params))
}

pub async fn query_body(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let body = body.or_empty();
    let filled = |key: &str| match body.get(key) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    };
    if !KEY.into_iter().all(filled) {
        return Err(lookup_key_required());
    }
    Ok(query_echo("Room query result", body))
}

fn lookup_key_required() -> AppError {
    AppError::Validation("name and belong_to_house are required".into())
}

/// Display form of a body field for the acknowledgement message.
pub(crate) fn text(body: &Map<String, Value>, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

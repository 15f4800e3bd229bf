//! Device handlers: validate and acknowledge.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::room::text;
use crate::model::DeviceQuery;
use crate::response::{message_ok, query_echo};
use crate::service::RequestValidator;
use axum::{extract::Query, response::IntoResponse};
use serde_json::Value;

const KEY: [&str; 2] = ["name", "belong_to_room"];

pub async fn add(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let body = body.require()?;
    RequestValidator::require_each(&body, &["name", "belong_to_room", "type"])?;
    Ok(message_ok("Device added successfully"))
}

pub async fn remove(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &KEY)?;
    let body = body.or_empty();
    Ok(message_ok(format!(
        "Device {} removed from room {}",
        text(&body, "name"),
        text(&body, "belong_to_room")
    )))
}

pub async fn update(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &KEY)?;
    Ok(message_ok(format!("Device {} updated", text(&body.or_empty(), "name"))))
}

pub async fn query(Query(params): Query<DeviceQuery>) -> impl IntoResponse {
    query_echo("Device query result", params)
}

pub async fn query_body(body: JsonBody) -> impl IntoResponse {
    query_echo("Device query result", Value::Object(body.or_empty()))
}

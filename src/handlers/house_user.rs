//! House-User membership handlers: validate and acknowledge.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::HouseUserQuery;
use crate::response::{message_ok, query_echo};
use crate::service::RequestValidator;
use axum::{extract::Query, response::IntoResponse};
use serde_json::Value;

const KEY: [&str; 2] = ["user_id", "house_uid"];

pub async fn add(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &KEY)?;
    Ok(message_ok("Relationship between user and house added"))
}

pub async fn remove(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &KEY)?;
    Ok(message_ok("Relationship between user and house removed"))
}

pub async fn update(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &KEY)?;
    Ok(message_ok("Relationship between user and house updated"))
}

pub async fn query(Query(params): Query<HouseUserQuery>) -> impl IntoResponse {
    query_echo("Query house-user relationships", params)
}

pub async fn query_body(body: JsonBody) -> impl IntoResponse {
    query_echo("Query house-user relationships", Value::Object(body.or_empty()))
}

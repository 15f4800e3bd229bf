//! Users handlers: validate and acknowledge.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::room::text;
use crate::model::UserQuery;
use crate::response::{message_ok, query_echo};
use crate::service::RequestValidator;
use axum::{extract::Query, response::IntoResponse};
use serde_json::Value;

pub async fn add(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    let body = body.require()?;
    RequestValidator::require_all(Some(&body), &["user_id", "name"])?;
    Ok(message_ok("User added successfully"))
}

pub async fn remove(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &["user_id"])?;
    Ok(message_ok(format!(
        "User with user_id={} removed",
        text(&body.or_empty(), "user_id")
    )))
}

/// The user_id is immutable; it only selects the user.
pub async fn update(body: JsonBody) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require_all(body.as_map(), &["user_id"])?;
    Ok(message_ok(format!(
        "User with user_id={} updated",
        text(&body.or_empty(), "user_id")
    )))
}

pub async fn query(Query(params): Query<UserQuery>) -> impl IntoResponse {
    query_echo("User query result", params)
}

pub async fn query_body(body: JsonBody) -> impl IntoResponse {
    query_echo("User query result", Value::Object(body.or_empty()))
}

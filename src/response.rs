//! Response bodies: `{message}`, `{message, uid}`, query echoes and `{error}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Acknowledgement for lookups that have no backing collection.
#[derive(Serialize)]
pub struct QueryEcho<T> {
    pub message: &'static str,
    pub query_params: T,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn message_ok(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.into(),
            uid: None,
        }),
    )
}

/// Success body for creates: carries the server-generated uid.
pub fn created_ok(message: impl Into<String>, uid: String) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.into(),
            uid: Some(uid),
        }),
    )
}

pub fn query_echo<T: Serialize>(message: &'static str, query_params: T) -> (StatusCode, Json<QueryEcho<T>>) {
    (StatusCode::OK, Json(QueryEcho { message, query_params }))
}

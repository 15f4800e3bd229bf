//! Lenient JSON object body: a missing, non-JSON or non-object body yields `None`
//! so each handler decides which error to report.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default)]
pub struct JsonBody(pub Option<Map<String, Value>>);

impl JsonBody {
    /// The body as a non-empty object, or `No JSON provided`.
    pub fn require(self) -> Result<Map<String, Value>, AppError> {
        self.0.filter(|m| !m.is_empty()).ok_or(AppError::MalformedRequest)
    }

    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        self.0.as_ref()
    }

    /// The body, with anything unusable treated as `{}`.
    pub fn or_empty(self) -> Map<String, Value> {
        self.0.unwrap_or_default()
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(JsonBody(None));
        }
        let bytes = Bytes::from_request(req, state).await?;
        let object = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "request body is not valid JSON");
                None
            }
        };
        Ok(JsonBody(object))
    }
}

//! Extract the request body as JSON, reporting unreadable bodies as `AppError`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::Value;

/// Raw JSON body. An empty body reads as `{}` so schema validation reports the
/// missing fields. The content type is not checked.
#[derive(Clone, Debug)]
pub struct JsonPayload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::Validation(rejection.body_text())
            }
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonPayload(Value::Object(serde_json::Map::new())));
        }
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Validation(format!("request body is not valid JSON: {}", e)))?;
        Ok(JsonPayload(value))
    }
}

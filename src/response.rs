//! Response body helpers. Success bodies are bare JSON (no envelope); errors and
//! acknowledgements use a single `message` field.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const DELETED_MESSAGE: &str = "Resource deleted successfully";

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}

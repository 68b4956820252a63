//! Resource CRUD handlers: create, list, read, update, delete.
//!
//! Each handler validates, runs one statement, and maps the outcome. Errors
//! propagate as `AppError`; internal ones are logged with the operation name
//! before they become the response.

use crate::error::AppError;
use crate::extractors::JsonPayload;
use crate::response::{self, DELETED_MESSAGE};
use crate::service::{CrudService, RequestValidator};
use crate::sql::BindValue;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

/// Query parameter holding the substring filter on `name`.
pub const NAME_FILTER_PARAM: &str = "name";

pub async fn create(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::resource_input(&body).map_err(|e| e.logged("create"))?;
    let record = CrudService::create(&state.store, input)
        .await
        .map_err(|e| e.logged("create"))?;
    tracing::debug!(id = ?record.id, "resource created");
    Ok(response::created(record))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = params.get(NAME_FILTER_PARAM).map(String::as_str);
    let rows = CrudService::list(&state.store, filter)
        .await
        .map_err(|e| e.logged("list"))?;
    Ok(response::ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = BindValue::from_path_id(&id_str);
    let row = CrudService::read(&state.store, &id)
        .await
        .map_err(|e| e.logged("read"))?
        .ok_or(AppError::NotFound)?;
    Ok(response::ok(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonPayload(body): JsonPayload,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::resource_input(&body).map_err(|e| e.logged("update"))?;
    let id = BindValue::from_path_id(&id_str);
    let record = CrudService::update(&state.store, &id, input)
        .await
        .map_err(|e| e.logged("update"))?
        .ok_or(AppError::NotFound)?;
    Ok(response::ok(record))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = BindValue::from_path_id(&id_str);
    let removed = CrudService::delete(&state.store, &id)
        .await
        .map_err(|e| e.logged("delete"))?;
    if !removed {
        return Err(AppError::NotFound);
    }
    Ok(response::message(DELETED_MESSAGE))
}

//! Resource CRUD execution against SQLite. One statement per operation.

use crate::error::AppError;
use crate::model::{Resource, ResourceInput, ResourceRecord};
use crate::sql::{self, BindValue};
use crate::store::Store;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

pub struct CrudService;

impl CrudService {
    /// Insert one row. The store assigns id and createdAt.
    pub async fn create(store: &Store, input: ResourceInput) -> Result<ResourceRecord, AppError> {
        let q = sql::insert(&input.name, input.description.as_deref());
        let outcome = store.execute(&q).await?;
        let id = outcome
            .last_insert_id
            .ok_or_else(|| AppError::Internal("insert returned no row id".into()))?;
        Ok(ResourceRecord::new(BindValue::Integer(id), input))
    }

    /// All rows, or rows whose name matches the filter. An empty filter means no filter.
    pub async fn list(store: &Store, name_filter: Option<&str>) -> Result<Vec<Resource>, AppError> {
        let filter = name_filter.filter(|s| !s.is_empty());
        let q = sql::select_list(filter);
        let outcome = store.execute(&q).await?;
        rows_to_resources(&outcome.rows)
    }

    pub async fn read(store: &Store, id: &BindValue) -> Result<Option<Resource>, AppError> {
        let q = sql::select_by_id(id);
        let outcome = store.execute(&q).await?;
        match outcome.rows.first() {
            Some(row) => Ok(Some(Resource::from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Update name and description. `None` when no row has this id.
    pub async fn update(
        store: &Store,
        id: &BindValue,
        input: ResourceInput,
    ) -> Result<Option<ResourceRecord>, AppError> {
        let q = sql::update(id, &input.name, input.description.as_deref());
        let outcome = store.execute(&q).await?;
        if outcome.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some(ResourceRecord::new(id.clone(), input)))
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete(store: &Store, id: &BindValue) -> Result<bool, AppError> {
        let q = sql::delete(id);
        let outcome = store.execute(&q).await?;
        Ok(outcome.rows_affected > 0)
    }
}

fn rows_to_resources(rows: &[SqliteRow]) -> Result<Vec<Resource>, AppError> {
    rows.iter()
        .map(|r| Resource::from_row(r).map_err(AppError::from))
        .collect()
}

//! Resource CRUD service and request validation.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::{FieldRule, PayloadSchema, RequestValidator, RESOURCE_SCHEMA};

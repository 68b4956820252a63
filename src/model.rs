//! Resource types: stored rows, validated input, and write acknowledgements.

use crate::sql::BindValue;
use serde::Serialize;

/// A row of the `resources` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Stored text, returned as-is (`CURRENT_TIMESTAMP` writes `YYYY-MM-DD HH:MM:SS`).
    #[sqlx(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Payload that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceInput {
    pub name: String,
    pub description: Option<String>,
}

/// Body returned by create and update: the id plus the fields as written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub id: BindValue,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ResourceRecord {
    pub fn new(id: BindValue, input: ResourceInput) -> Self {
        ResourceRecord {
            id,
            name: input.name,
            description: input.description,
        }
    }
}

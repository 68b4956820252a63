//! Values bound to SQLite statements.

use serde::Serialize;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A value that can be bound to a SQLite statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BindValue {
    Null,
    Integer(i64),
    Text(String),
}

impl BindValue {
    /// Path ids are opaque keys: bind as an integer when they look like one, else as text.
    pub fn from_path_id(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) => BindValue::Integer(n),
            Err(_) => BindValue::Text(raw.to_string()),
        }
    }

    pub fn bind<'q>(&self, query: Query<'q, Sqlite, SqliteArguments<'q>>) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            BindValue::Null => query.bind(None::<String>),
            BindValue::Integer(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
        }
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

impl From<Option<String>> for BindValue {
    fn from(s: Option<String>) -> Self {
        s.map_or(BindValue::Null, BindValue::Text)
    }
}

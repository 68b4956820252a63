//! Builds the parameterized INSERT, SELECT, UPDATE, DELETE statements for `resources`.

use crate::sql::params::BindValue;

pub const RESOURCES_TABLE: &str = "resources";

/// Idempotent DDL run on every new store connection.
pub const CREATE_RESOURCES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS resources (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        createdAt TEXT DEFAULT CURRENT_TIMESTAMP
    )
"#;

const SELECT_COLUMNS: &str = "id, name, description, createdAt";

/// Whether a statement yields rows or only a change count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    Read,
    Write,
}

#[derive(Clone, Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
    pub kind: StatementKind,
}

impl QueryBuf {
    fn new(kind: StatementKind) -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
            kind,
        }
    }

    fn push_param(&mut self, v: impl Into<BindValue>) {
        self.params.push(v.into());
    }
}

/// INSERT name and description; id and createdAt come from the store.
pub fn insert(name: &str, description: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new(StatementKind::Write);
    q.sql = format!("INSERT INTO {} (name, description) VALUES (?, ?)", RESOURCES_TABLE);
    q.push_param(name.to_string());
    q.push_param(description.map(str::to_string));
    q
}

/// SELECT all rows, or rows whose name matches `%filter%` under SQLite `LIKE`.
pub fn select_list(name_filter: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new(StatementKind::Read);
    match name_filter {
        Some(filter) => {
            q.sql = format!(
                "SELECT {} FROM {} WHERE name LIKE ? ORDER BY id",
                SELECT_COLUMNS, RESOURCES_TABLE
            );
            q.push_param(format!("%{}%", filter));
        }
        None => {
            q.sql = format!("SELECT {} FROM {} ORDER BY id", SELECT_COLUMNS, RESOURCES_TABLE);
        }
    }
    q
}

pub fn select_by_id(id: &BindValue) -> QueryBuf {
    let mut q = QueryBuf::new(StatementKind::Read);
    q.sql = format!("SELECT {} FROM {} WHERE id = ?", SELECT_COLUMNS, RESOURCES_TABLE);
    q.push_param(id.clone());
    q
}

/// UPDATE name and description by id. Zero rows affected means the id does not exist.
pub fn update(id: &BindValue, name: &str, description: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new(StatementKind::Write);
    q.sql = format!("UPDATE {} SET name = ?, description = ? WHERE id = ?", RESOURCES_TABLE);
    q.push_param(name.to_string());
    q.push_param(description.map(str::to_string));
    q.push_param(id.clone());
    q
}

pub fn delete(id: &BindValue) -> QueryBuf {
    let mut q = QueryBuf::new(StatementKind::Write);
    q.sql = format!("DELETE FROM {} WHERE id = ?", RESOURCES_TABLE);
    q.push_param(id.clone());
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_binds_values_not_sql() {
        let q = insert("Robert'); DROP TABLE resources;--", None);
        assert_eq!(q.sql, "INSERT INTO resources (name, description) VALUES (?, ?)");
        assert_eq!(q.kind, StatementKind::Write);
        assert_eq!(
            q.params,
            vec![BindValue::Text("Robert'); DROP TABLE resources;--".into()), BindValue::Null]
        );
    }

    #[test]
    fn list_filter_is_wildcard_wrapped() {
        let q = select_list(Some("abc"));
        assert!(q.sql.contains("WHERE name LIKE ?"));
        assert_eq!(q.params, vec![BindValue::Text("%abc%".into())]);

        let all = select_list(None);
        assert!(!all.sql.contains("WHERE"));
        assert!(all.params.is_empty());
        assert_eq!(all.kind, StatementKind::Read);
    }

    #[test]
    fn update_binds_id_last() {
        let q = update(&BindValue::Integer(3), "n", Some("d"));
        assert_eq!(
            q.params,
            vec![
                BindValue::Text("n".into()),
                BindValue::Text("d".into()),
                BindValue::Integer(3)
            ]
        );
    }

    #[test]
    fn delete_and_select_by_id_take_one_param() {
        let id = BindValue::Text("x".into());
        assert_eq!(delete(&id).params, vec![id.clone()]);
        assert_eq!(select_by_id(&id).params, vec![id]);
    }
}

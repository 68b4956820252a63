//! Storage gateway: SQLite pool setup and single-statement execution.
//!
//! Every call checks one connection out of the pool and hands it back when the
//! checkout guard drops, whichever way the call exits. The `resources` table is
//! created (if absent) each time the pool opens a new connection.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::sql::{QueryBuf, StatementKind, CREATE_RESOURCES_TABLE};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one statement. Reads fill `rows`; writes fill `rows_affected` and `last_insert_id`.
#[derive(Default)]
pub struct StatementOutcome {
    pub rows: Vec<SqliteRow>,
    pub last_insert_id: Option<i64>,
    pub rows_affected: u64,
}

#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a pool for `config.database_url`, creating the database file if missing.
    pub async fn connect(config: &ServerConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query(CREATE_RESOURCES_TABLE).execute(conn).await?;
                    Ok(())
                })
            })
            .connect_with(options)
            .await?;
        tracing::info!(url = %config.database_url, "store connected");
        Ok(Store { pool })
    }

    /// Run one statement on a freshly checked-out connection.
    pub async fn execute(&self, q: &QueryBuf) -> Result<StatementOutcome, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = p.bind(query);
        }
        let outcome = match q.kind {
            StatementKind::Read => {
                let rows = query.fetch_all(&mut *conn).await?;
                StatementOutcome {
                    rows,
                    ..StatementOutcome::default()
                }
            }
            StatementKind::Write => {
                let done = query.execute(&mut *conn).await?;
                StatementOutcome {
                    rows: Vec::new(),
                    last_insert_id: Some(done.last_insert_rowid()),
                    rows_affected: done.rows_affected(),
                }
            }
        };
        Ok(outcome)
    }

    /// Liveness probe for the readiness route.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

//! Schema bootstrap for the credential store.

use sqlx::SqlitePool;
use tracing::info;

use safevault_core::error::AppError;

use crate::connection::db_error;

/// Name of the users table.
pub const USERS_TABLE: &str = "Users";

/// DDL for the users table. The primary key is what serializes concurrent
/// inserts of the same username.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE Users (
    username TEXT PRIMARY KEY NOT NULL,
    password_hash TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'User' CHECK (role IN ('Admin', 'User')),
    email TEXT
)
"#;

/// Returns whether a table with the given name exists.
pub async fn table_exists(pool: &SqlitePool, name: &str) -> Result<bool, AppError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(name)
            .fetch_one(pool)
            .await
            .map_err(|e| db_error("Failed to inspect schema", e))?;
    Ok(count > 0)
}

/// Creates the users table unless it already exists.
///
/// Returns `true` when the table was created by this call.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<bool, AppError> {
    if table_exists(pool, USERS_TABLE).await? {
        return Ok(false);
    }

    info!(table = USERS_TABLE, "Creating credential store schema");
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| db_error("Failed to create users table", e))?;
    Ok(true)
}

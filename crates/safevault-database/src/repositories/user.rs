//! User repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

use safevault_core::error::AppError;
use safevault_core::result::AppResult;
use safevault_core::sanitize;
use safevault_entity::user::{BOOTSTRAP_ADMIN_USERNAME, NewUser, UserRecord, UserRole};

use crate::connection::db_error;
use crate::migration;
use crate::store::CredentialStore;

/// SQLite-backed credential store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ensures the schema and the administrator record exist.
    ///
    /// Safe to call on every start. `admin_password_hash` is only invoked
    /// when the administrator record has to be created.
    pub async fn initialize<F>(&self, admin_password_hash: F) -> AppResult<()>
    where
        F: FnOnce() -> AppResult<String>,
    {
        migration::ensure_schema(&self.pool).await?;

        if self
            .get_by_username(BOOTSTRAP_ADMIN_USERNAME)
            .await?
            .is_some()
        {
            debug!("Administrator record already present");
            return Ok(());
        }

        let password_hash = admin_password_hash()?;
        self.add(NewUser {
            username: BOOTSTRAP_ADMIN_USERNAME.to_string(),
            password_hash,
            role: UserRole::Admin,
            email: None,
        })
        .await?;

        info!(
            username = BOOTSTRAP_ADMIN_USERNAME,
            "Created bootstrap administrator"
        );
        Ok(())
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count users", e))?;
        Ok(count as u64)
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn get_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT username, password_hash, role, email FROM Users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find user by username", e))
    }

    async fn get_all(&self) -> AppResult<Vec<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT username, password_hash, role, email FROM Users ORDER BY username ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list users", e))
    }

    async fn add(&self, user: NewUser) -> AppResult<UserRecord> {
        let username = sanitize::sanitize(&user.username);
        let email = user
            .email
            .as_deref()
            .map(sanitize::sanitize)
            .filter(|e| !e.is_empty());

        if username.is_empty() || user.password_hash.trim().is_empty() {
            return Err(AppError::validation("Username and password are required"));
        }
        if let Some(ref email) = email {
            if !sanitize::is_valid_email(email) {
                return Err(AppError::validation("Invalid email address"));
            }
        }

        let record = UserRecord {
            username,
            password_hash: user.password_hash,
            role: user.role,
            email,
        };

        sqlx::query("INSERT INTO Users (username, password_hash, role, email) VALUES (?1, ?2, ?3, ?4)")
            .bind(&record.username)
            .bind(&record.password_hash)
            .bind(record.role)
            .bind(&record.email)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    AppError::conflict(format!("Username '{}' already exists", record.username))
                }
                _ => db_error("Failed to create user", e),
            })?;

        debug!(username = %record.username, role = %record.role, "Inserted user");
        Ok(record)
    }

    async fn delete(&self, username: &str) -> AppResult<()> {
        let user = self
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        if user.is_admin() {
            return Err(AppError::protected_resource("Cannot delete admin"));
        }

        // The role guard keeps the statement safe even if the row changed
        // between the lookup and the delete.
        let result = sqlx::query("DELETE FROM Users WHERE username = ?1 AND role <> 'Admin'")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User '{username}' not found")));
        }
        Ok(())
    }
}

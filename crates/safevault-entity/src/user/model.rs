//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// Username of the administrator record created at first boot.
pub const BOOTSTRAP_ADMIN_USERNAME: &str = "admin";

/// A row of the `Users` table.
///
/// Never serialized to callers directly; use [`UserSummary`].
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash (PHC string).
    pub password_hash: String,
    /// User role (RBAC).
    pub role: UserRole,
    /// Email address (optional).
    pub email: Option<String>,
}

impl UserRecord {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns the externally visible projection of this record.
    pub fn summary(&self) -> UserSummary {
        UserSummary::from(self)
    }
}

/// Data required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Email address (optional).
    pub email: Option<String>,
}

/// User listing entry. Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Username.
    pub username: String,
    /// Email.
    pub email: Option<String>,
    /// Role.
    pub role: UserRole,
}

impl From<&UserRecord> for UserSummary {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            role: record.role,
        }
    }
}

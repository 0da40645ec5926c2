//! Admin user management: list, create, and delete.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use safevault_auth::password::PasswordHasher;
use safevault_auth::rbac::{RbacEnforcer, SystemPermission};
use safevault_core::error::AppError;
use safevault_core::sanitize;
use safevault_database::store::CredentialStore;
use safevault_entity::user::{NewUser, UserRole, UserSummary};

use crate::context::RequestContext;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Username (unique).
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Role name; `User` when absent.
    pub role: Option<String>,
    /// Email (optional).
    pub email: Option<String>,
}

/// Handles administrative user management operations.
#[derive(Clone)]
pub struct AdminUserService {
    /// Credential store.
    store: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl std::fmt::Debug for AdminUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminUserService").finish_non_exhaustive()
    }
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            store,
            hasher,
            rbac,
        }
    }

    /// Lists all users without their password hashes.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<UserSummary>, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::UserList)?;

        let users = self.store.get_all().await?;
        Ok(users.iter().map(UserSummary::from).collect())
    }

    /// Creates a new user.
    pub async fn add_user(
        &self,
        ctx: &RequestContext,
        req: CreateUserRequest,
    ) -> Result<UserSummary, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::UserCreate)?;

        if req.username.trim().is_empty() || req.password.trim().is_empty() {
            return Err(AppError::validation("Username and password are required"));
        }
        reject_unsafe("username", &req.username)?;

        let email = match req.email.as_deref() {
            None | Some("") => None,
            Some(email) => {
                reject_unsafe("email", email)?;
                if !sanitize::is_valid_email(email) {
                    return Err(AppError::validation("Invalid email address"));
                }
                Some(email.to_string())
            }
        };

        let role = match req.role.as_deref().map(str::trim) {
            None | Some("") => UserRole::default(),
            Some(role) => role.parse::<UserRole>()?,
        };

        let password_hash = self.hasher.hash_password(&req.password)?;
        let created = self
            .store
            .add(NewUser {
                username: req.username,
                password_hash,
                role,
                email,
            })
            .await?;

        info!(
            admin = %ctx.username,
            username = %created.username,
            role = %created.role,
            "User created"
        );

        Ok(created.summary())
    }

    /// Deletes a user. Admin records are refused by the store.
    pub async fn delete_user(&self, ctx: &RequestContext, username: &str) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::UserDelete)?;

        if username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        reject_unsafe("username", username)?;

        self.store.delete(username).await?;

        info!(admin = %ctx.username, username = %username, "User deleted");
        Ok(())
    }
}

/// Refuses values the sanitizer would alter or that carry script markup.
fn reject_unsafe(field: &str, value: &str) -> Result<(), AppError> {
    let checked = sanitize::check(value);
    if !checked.accepted || sanitize::contains_xss_marker(value) {
        warn!(field, "Rejected unsafe input");
        return Err(AppError::validation(format!(
            "The {field} contains characters that are not allowed"
        )));
    }
    Ok(())
}

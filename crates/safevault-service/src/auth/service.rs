//! Login, token verification, and who-am-I.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use safevault_auth::jwt::TokenService;
use safevault_auth::password::PasswordHasher;
use safevault_auth::rbac::{RbacEnforcer, SystemPermission};
use safevault_core::error::AppError;
use safevault_database::store::CredentialStore;
use safevault_entity::user::UserRole;

use crate::context::RequestContext;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Signed bearer token.
    pub token: String,
    /// The authenticated username.
    pub username: String,
    /// The authenticated user's role.
    pub role: UserRole,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// The caller's own identity.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    /// Username from the token subject.
    pub username: String,
    /// Role from the token.
    pub role: UserRole,
}

/// Authenticates users and resolves bearer tokens to request contexts.
#[derive(Clone)]
pub struct AuthService {
    /// Credential store.
    store: Arc<dyn CredentialStore>,
    /// Token issuance and verification.
    tokens: Arc<TokenService>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        tokens: Arc<TokenService>,
        hasher: Arc<PasswordHasher>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            store,
            tokens,
            hasher,
            rbac,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Reject blank credentials
    /// 2. Find user
    /// 3. Verify password
    /// 4. Issue token
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::validation("Username and password are required"));
        }

        let Some(user) = self.store.get_by_username(username).await? else {
            self.hasher.verify_dummy(password);
            warn!(username = %username, "Login failed: unknown user");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(username = %username, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let issued = self.tokens.issue(&user.username, user.role)?;

        info!(username = %user.username, role = %user.role, "User logged in");

        Ok(LoginResult {
            token: issued.token,
            username: user.username,
            role: user.role,
            expires_at: issued.expires_at,
        })
    }

    /// Resolves a bearer token into a request context.
    ///
    /// Every token failure surfaces as `Authentication`.
    pub fn authenticate(&self, token: &str) -> Result<RequestContext, AppError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            warn!(reason = %e, "Rejected bearer token");
            AppError::from(e)
        })?;
        Ok(RequestContext::from(claims))
    }

    /// Returns the caller's username and role.
    pub fn who_am_i(&self, ctx: &RequestContext) -> Result<Identity, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::ViewOwnIdentity)?;

        Ok(Identity {
            username: ctx.username.clone(),
            role: ctx.role,
        })
    }
}

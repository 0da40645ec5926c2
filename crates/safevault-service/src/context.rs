//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use safevault_auth::jwt::TokenClaims;
use safevault_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from verified token claims and passed into service methods so
/// that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated username.
    pub username: String,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// When the presented token stops being accepted.
    pub token_expires_at: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(username: impl Into<String>, role: UserRole, token_expires_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            role,
            token_expires_at,
        }
    }
}

impl From<TokenClaims> for RequestContext {
    fn from(claims: TokenClaims) -> Self {
        let token_expires_at = claims.expires_at();
        Self {
            username: claims.sub,
            role: claims.role,
            token_expires_at,
        }
    }
}

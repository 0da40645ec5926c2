//! JWT token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

use safevault_core::error::AppError;
use safevault_entity::user::UserRole;

use super::claims::TokenClaims;

/// Lifetime of every issued token.
pub const TOKEN_TTL: Duration = Duration::hours(1);

/// A freshly signed token together with its expiry.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    /// Instant after which the token is refused.
    pub expires_at: DateTime<Utc>,
}

/// Creates HS256-signed bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl JwtEncoder {
    /// Creates a new encoder from the signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Issues a token for `username` valid for [`TOKEN_TTL`] from now.
    pub fn issue(&self, username: &str, role: UserRole) -> Result<IssuedToken, AppError> {
        self.issue_at(username, role, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        username: &str,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let expires_at = now + TOKEN_TTL;
        let claims = TokenClaims {
            sub: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}

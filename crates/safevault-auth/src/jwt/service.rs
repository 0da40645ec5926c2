//! Token issuance and verification behind one handle.

use std::fmt;

use chrono::{DateTime, Utc};

use safevault_core::error::AppError;
use safevault_entity::user::UserRole;

use super::claims::TokenClaims;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};
use super::error::TokenError;

/// Issues and verifies bearer tokens with a single shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Creates a token service from the signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoder: JwtEncoder::new(secret.as_bytes()),
            decoder: JwtDecoder::new(secret.as_bytes()),
        }
    }

    /// Issues a one-hour token for the given identity.
    pub fn issue(&self, username: &str, role: UserRole) -> Result<IssuedToken, AppError> {
        self.encoder.issue(username, role)
    }

    /// Issues a token using an explicit clock.
    pub fn issue_at(
        &self,
        username: &str,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        self.encoder.issue_at(username, role, now)
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.decoder.verify(token)
    }

    /// Verifies a token using an explicit clock.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        self.decoder.verify_at(token, now)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

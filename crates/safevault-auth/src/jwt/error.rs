//! Token verification failures.

use safevault_core::error::AppError;

/// Why a bearer token was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The signature does not match the signing key.
    #[error("Invalid token signature")]
    InvalidSignature,
    /// The signature is valid but the token is past its expiry.
    #[error("Token has expired")]
    Expired,
    /// The input is not a well-formed token.
    #[error("Invalid token format")]
    Malformed,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authentication(err.to_string())
    }
}

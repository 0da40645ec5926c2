//! Authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum accepted length of the token signing secret, in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Authentication and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Must be supplied externally.
    #[serde(default)]
    pub jwt_secret: String,
    /// Password given to the administrator record when it is first created.
    #[serde(default = "default_bootstrap_password")]
    pub bootstrap_admin_password: String,
}

impl AuthConfig {
    /// Creates an auth configuration with the given secret and default settings.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            bootstrap_admin_password: default_bootstrap_password(),
        }
    }
}

// Secrets stay out of log output.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("bootstrap_admin_password", &"****")
            .finish()
    }
}

fn default_bootstrap_password() -> String {
    "admin".to_string()
}

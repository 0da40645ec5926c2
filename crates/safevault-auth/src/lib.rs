//! # safevault-auth
//!
//! Authentication primitives for SafeVault.
//!
//! ## Modules
//!
//! - `jwt`: signed bearer token issuance and verification
//! - `password`: Argon2id password hashing
//! - `rbac`: role-based access control enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{IssuedToken, JwtDecoder, JwtEncoder, TokenClaims, TokenError, TokenService};
pub use password::PasswordHasher;
pub use rbac::{AccessDecision, RbacEnforcer, SystemPermission, authorize};

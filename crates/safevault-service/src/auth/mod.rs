//! Login and token-based identity.

pub mod service;

pub use service::{AuthService, Identity, LoginResult};

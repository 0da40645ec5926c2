//! # safevault-service
//!
//! Access control layer for SafeVault. Each service orchestrates the
//! credential store, the token service, and the RBAC enforcer to implement
//! one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod user;

pub use auth::{AuthService, Identity, LoginResult};
pub use context::RequestContext;
pub use user::{AdminUserService, CreateUserRequest};

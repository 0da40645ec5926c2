//! # safevault-database
//!
//! SQLite connection management, schema bootstrap, and the credential
//! store backing every SafeVault user operation.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::UserRepository;
pub use store::CredentialStore;

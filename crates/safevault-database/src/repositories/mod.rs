//! Repository implementations for SafeVault entities.

pub mod user;

pub use user::UserRepository;

//! # safevault-core
//!
//! Core crate for SafeVault. Contains configuration schemas, the unified
//! error system, and the input sanitizer that guards every write path.
//!
//! This crate has **no** internal dependencies on other SafeVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod sanitize;

pub use error::AppError;
pub use result::AppResult;

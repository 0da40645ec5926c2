//! Role-based access control.

pub mod enforcer;
pub mod policies;

pub use enforcer::{AccessDecision, RbacEnforcer, authorize};
pub use policies::SystemPermission;

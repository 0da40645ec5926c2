//! User domain entities.

pub mod model;
pub mod role;

pub use model::{BOOTSTRAP_ADMIN_USERNAME, NewUser, UserRecord, UserSummary};
pub use role::UserRole;

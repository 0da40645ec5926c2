//! Permission-to-role mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use safevault_entity::user::UserRole;

/// A system-level operation guarded by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPermission {
    /// List every user.
    UserList,
    /// Create new users.
    UserCreate,
    /// Delete users.
    UserDelete,
    /// Read the caller's own identity.
    ViewOwnIdentity,
}

impl SystemPermission {
    /// The least privileged role that holds this permission.
    pub fn required_role(&self) -> UserRole {
        match self {
            Self::UserList | Self::UserCreate | Self::UserDelete => UserRole::Admin,
            Self::ViewOwnIdentity => UserRole::User,
        }
    }
}

impl fmt::Display for SystemPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UserList => "user_list",
            Self::UserCreate => "user_create",
            Self::UserDelete => "user_delete",
            Self::ViewOwnIdentity => "view_own_identity",
        };
        f.write_str(name)
    }
}

//! RBAC enforcement logic.

use tracing::debug;

use safevault_core::error::AppError;
use safevault_entity::user::UserRole;

use super::policies::SystemPermission;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The role satisfies the requirement.
    Permitted,
    /// The role is insufficient.
    Forbidden,
}

/// Decides whether `actual` satisfies `required`.
pub fn authorize(actual: UserRole, required: UserRole) -> AccessDecision {
    if actual.has_at_least(&required) {
        AccessDecision::Permitted
    } else {
        AccessDecision::Forbidden
    }
}

/// Enforces role-based access control for system-level operations.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether the given role holds `permission`.
    ///
    /// Returns `Ok(())` if allowed, or an `Authorization` error if denied.
    pub fn require_permission(
        &self,
        role: UserRole,
        permission: SystemPermission,
    ) -> Result<(), AppError> {
        match authorize(role, permission.required_role()) {
            AccessDecision::Permitted => Ok(()),
            AccessDecision::Forbidden => {
                debug!(%role, %permission, "Permission denied");
                Err(AppError::authorization(format!(
                    "Role '{role}' does not have permission '{permission}'"
                )))
            }
        }
    }
}

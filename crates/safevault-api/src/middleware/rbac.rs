//! RBAC helpers for route guarding.

use safevault_auth::rbac::SystemPermission;
use safevault_core::error::AppError;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// Checks the caller's permission. Handlers call this before unpacking the body.
pub fn require_permission(
    state: &AppState,
    auth: &AuthUser,
    permission: SystemPermission,
) -> Result<(), AppError> {
    state.rbac.require_permission(auth.role, permission)
}

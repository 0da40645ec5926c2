//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};

use safevault_auth::rbac::SystemPermission;
use safevault_core::error::AppError;
use safevault_entity::user::UserSummary;

use crate::dto::request::AddUserRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::middleware::rbac::require_permission;
use crate::state::AppState;

/// GET /api/auth/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<UserSummary>>>, AppError> {
    let users = state.admin_user_service.list_users(&auth).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// POST /api/auth/add-user
pub async fn add_user(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<ValidatedJson<AddUserRequest>, AppError>,
) -> Result<Json<ApiResponse<UserSummary>>, AppError> {
    require_permission(&state, &auth, SystemPermission::UserCreate)?;
    let ValidatedJson(req) = body?;

    let created = state
        .admin_user_service
        .add_user(&auth, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(created)))
}

/// DELETE /api/auth/delete-user/{username}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state
        .admin_user_service
        .delete_user(&auth, &username)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "User '{username}' deleted"
    )))))
}

//! Health check handler.

use axum::Json;
use axum::extract::State;

use safevault_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    if !state.db.health_check().await? {
        return Err(AppError::service_unavailable("Credential store is not reachable"));
    }

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        database: "connected".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })))
}

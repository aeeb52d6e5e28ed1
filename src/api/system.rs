use axum::{Json, extract::State};
use std::sync::Arc;

use super::types::{ApiResponse, DbHealthReport, HealthReport, SetupReport, SystemStatus};
use super::{ApiError, AppState};

/// GET /api/system/health - liveness, no database round-trip.
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<HealthReport>>, ApiError> {
    let report = state.system().health().await?;
    Ok(Json(ApiResponse::success(report)))
}

/// GET /api/system/health/db - connectivity plus the live table list.
pub async fn db_health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<DbHealthReport>>, ApiError> {
    let report = state.system().db_health().await?;
    Ok(Json(ApiResponse::success(report)))
}

/// POST /api/system/setup - create missing tables. Safe to call repeatedly.
pub async fn setup(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SetupReport>>, ApiError> {
    let report = state.system().setup().await?;
    Ok(Json(ApiResponse::success(report)))
}

/// GET /api/system/status
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let uptime = state.start_time.elapsed().as_secs();
    let status = state
        .system()
        .status(uptime, env!("CARGO_PKG_VERSION"))
        .await?;

    Ok(Json(ApiResponse::success(status)))
}

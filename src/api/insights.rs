use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{ApiResponse, InsightDto, SaveInsightRequest};
use super::{ApiError, AppState};

/// GET /api/insights - the user's industry insight row, `data: null` if absent.
pub async fn get_insight(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Option<InsightDto>>>, ApiError> {
    let insight = state.artifacts().get_insight(&user).await?;
    Ok(Json(ApiResponse::success(insight.map(InsightDto::from))))
}

/// PUT /api/insights - insert-or-overwrite the user's single insight row.
pub async fn save_insight(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<SaveInsightRequest>,
) -> Result<Json<ApiResponse<InsightDto>>, ApiError> {
    let insights = payload.insights.map(|v| v.to_string());

    let saved = state
        .artifacts()
        .save_insight(&user, payload.industry.as_deref(), insights.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(InsightDto::from(saved))))
}

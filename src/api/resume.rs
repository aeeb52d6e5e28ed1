use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{ApiResponse, ImproveRequest, ImprovedContentDto, ResumeDto, SaveResumeRequest};
use super::{ApiError, AppState};

/// GET /api/resume - the user's resume, `data: null` when none saved yet.
pub async fn get_resume(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Option<ResumeDto>>>, ApiError> {
    let resume = state.artifacts().get_resume(&user).await?;
    Ok(Json(ApiResponse::success(resume.map(ResumeDto::from))))
}

/// PUT /api/resume - insert-or-overwrite the user's single resume.
pub async fn save_resume(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<SaveResumeRequest>,
) -> Result<Json<ApiResponse<ResumeDto>>, ApiError> {
    let saved = state.artifacts().save_resume(&user, &payload.content).await?;
    Ok(Json(ApiResponse::success(ResumeDto::from(saved))))
}

/// POST /api/resume/improve - AI rewrite of one resume section.
pub async fn improve_content(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<ImproveRequest>,
) -> Result<Json<ApiResponse<ImprovedContentDto>>, ApiError> {
    let improved = state
        .improve()
        .improve(&user, &payload.content_type, &payload.current)
        .await?;

    Ok(Json(ApiResponse::success(ImprovedContentDto { improved })))
}

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{ApiResponse, CoverLetterDto, CreateCoverLetterRequest};
use super::{ApiError, AppState};
use crate::db::CoverLetterInput;

/// GET /api/cover-letters - all of the user's letters, newest first.
pub async fn list_cover_letters(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Vec<CoverLetterDto>>>, ApiError> {
    let letters = state.artifacts().list_cover_letters(&user).await?;
    Ok(Json(ApiResponse::success(
        letters.into_iter().map(CoverLetterDto::from).collect(),
    )))
}

/// POST /api/cover-letters
pub async fn create_cover_letter(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateCoverLetterRequest>,
) -> Result<Json<ApiResponse<CoverLetterDto>>, ApiError> {
    let input = CoverLetterInput {
        job_title: payload.job_title,
        company_name: payload.company_name,
        content: payload.content,
    };

    let created = state.artifacts().create_cover_letter(&user, input).await?;
    Ok(Json(ApiResponse::success(CoverLetterDto::from(created))))
}

/// GET /api/cover-letters/{id} - 404 unless the letter belongs to the user.
pub async fn get_cover_letter(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CoverLetterDto>>, ApiError> {
    let letter = state.artifacts().get_cover_letter(&user, id).await?;
    Ok(Json(ApiResponse::success(CoverLetterDto::from(letter))))
}

/// DELETE /api/cover-letters/{id}
pub async fn delete_cover_letter(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.artifacts().delete_cover_letter(&user, id).await?;
    Ok(Json(ApiResponse::success(())))
}

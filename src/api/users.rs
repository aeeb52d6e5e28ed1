use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{ApiResponse, OnboardingDto, SetIndustryRequest, UserDto};
use super::{ApiError, AppState};

/// GET /api/users/me - the local mirror of the authenticated user.
pub async fn me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<ApiResponse<UserDto>> {
    Json(ApiResponse::success(UserDto::from(user)))
}

/// GET /api/users/me/onboarding
pub async fn onboarding_status(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<OnboardingDto>>, ApiError> {
    let status = state.artifacts().onboarding_status(&user).await?;
    Ok(Json(ApiResponse::success(OnboardingDto::from(status))))
}

/// PUT /api/users/me/industry - completes onboarding.
pub async fn set_industry(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<SetIndustryRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let updated = state
        .artifacts()
        .set_industry(&user, &payload.industry)
        .await?;

    Ok(Json(ApiResponse::success(UserDto::from(updated))))
}

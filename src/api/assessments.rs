use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{ApiResponse, AssessmentDto, RecordAssessmentRequest};
use super::{ApiError, AppState};
use crate::db::AssessmentInput;

/// GET /api/assessments - the user's quiz history, newest first.
pub async fn list_assessments(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Vec<AssessmentDto>>>, ApiError> {
    let assessments = state.artifacts().list_assessments(&user).await?;
    Ok(Json(ApiResponse::success(
        assessments.into_iter().map(AssessmentDto::from).collect(),
    )))
}

/// POST /api/assessments - record a completed quiz.
pub async fn record_assessment(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<RecordAssessmentRequest>,
) -> Result<Json<ApiResponse<AssessmentDto>>, ApiError> {
    let input = AssessmentInput {
        category: payload.category,
        questions: payload.questions.map(|v| v.to_string()),
        answers: payload.answers.map(|v| v.to_string()),
        feedback: payload.feedback,
        score: payload.score,
    };

    let recorded = state.artifacts().record_assessment(&user, input).await?;
    Ok(Json(ApiResponse::success(AssessmentDto::from(recorded))))
}

//! Domain service for user-owned career artifacts.
//!
//! Every operation is scoped to the authenticated user's row set; absence
//! is a value (`None`/empty vec), never an error.

use serde::Serialize;
use thiserror::Error;

use crate::db::{AssessmentInput, CoverLetterInput};
use crate::entities::{assessments, cover_letters, industry_insights, resumes, users};

/// Errors specific to artifact operations.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[source] anyhow::Error),
}

impl From<anyhow::Error> for ArtifactError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err)
    }
}

/// Whether the user has completed onboarding (picked an industry).
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingStatus {
    pub is_onboarded: bool,
    pub industry: Option<String>,
}

/// Domain service trait for artifact reads and upserts.
#[async_trait::async_trait]
pub trait ArtifactService: Send + Sync {
    /// Insert-or-overwrite the user's single resume. Atomic per user: a
    /// second save updates the row the first one created.
    async fn save_resume(
        &self,
        user: &users::Model,
        content: &str,
    ) -> Result<resumes::Model, ArtifactError>;

    /// The user's resume, or `None` when nothing has been saved yet.
    async fn get_resume(
        &self,
        user: &users::Model,
    ) -> Result<Option<resumes::Model>, ArtifactError>;

    async fn create_cover_letter(
        &self,
        user: &users::Model,
        input: CoverLetterInput,
    ) -> Result<cover_letters::Model, ArtifactError>;

    async fn list_cover_letters(
        &self,
        user: &users::Model,
    ) -> Result<Vec<cover_letters::Model>, ArtifactError>;

    async fn get_cover_letter(
        &self,
        user: &users::Model,
        id: i32,
    ) -> Result<cover_letters::Model, ArtifactError>;

    async fn delete_cover_letter(
        &self,
        user: &users::Model,
        id: i32,
    ) -> Result<(), ArtifactError>;

    async fn record_assessment(
        &self,
        user: &users::Model,
        input: AssessmentInput,
    ) -> Result<assessments::Model, ArtifactError>;

    async fn list_assessments(
        &self,
        user: &users::Model,
    ) -> Result<Vec<assessments::Model>, ArtifactError>;

    async fn get_insight(
        &self,
        user: &users::Model,
    ) -> Result<Option<industry_insights::Model>, ArtifactError>;

    async fn save_insight(
        &self,
        user: &users::Model,
        industry: Option<&str>,
        insights: Option<&str>,
    ) -> Result<industry_insights::Model, ArtifactError>;

    /// Onboarded means the user picked an industry.
    async fn onboarding_status(
        &self,
        user: &users::Model,
    ) -> Result<OnboardingStatus, ArtifactError>;

    /// Sets the user's industry and keeps the insight row in step.
    async fn set_industry(
        &self,
        user: &users::Model,
        industry: &str,
    ) -> Result<users::Model, ArtifactError>;
}

//! `SeaORM` implementation of the `ArtifactService` trait.

use async_trait::async_trait;

use crate::db::{AssessmentInput, CoverLetterInput, Store};
use crate::entities::{assessments, cover_letters, industry_insights, resumes, users};
use crate::services::artifact_service::{ArtifactError, ArtifactService, OnboardingStatus};

pub struct SeaOrmArtifactService {
    store: Store,
}

impl SeaOrmArtifactService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArtifactService for SeaOrmArtifactService {
    async fn save_resume(
        &self,
        user: &users::Model,
        content: &str,
    ) -> Result<resumes::Model, ArtifactError> {
        serde_json::from_str::<serde_json::Value>(content)
            .map_err(|e| ArtifactError::Validation(format!("Resume content is not JSON: {e}")))?;

        Ok(self.store.upsert_resume(user.id, content).await?)
    }

    async fn get_resume(
        &self,
        user: &users::Model,
    ) -> Result<Option<resumes::Model>, ArtifactError> {
        Ok(self.store.get_resume(user.id).await?)
    }

    async fn create_cover_letter(
        &self,
        user: &users::Model,
        input: CoverLetterInput,
    ) -> Result<cover_letters::Model, ArtifactError> {
        Ok(self.store.create_cover_letter(user.id, &input).await?)
    }

    async fn list_cover_letters(
        &self,
        user: &users::Model,
    ) -> Result<Vec<cover_letters::Model>, ArtifactError> {
        Ok(self.store.list_cover_letters(user.id).await?)
    }

    async fn get_cover_letter(
        &self,
        user: &users::Model,
        id: i32,
    ) -> Result<cover_letters::Model, ArtifactError> {
        self.store
            .get_cover_letter(user.id, id)
            .await?
            .ok_or(ArtifactError::NotFound("Cover letter"))
    }

    async fn delete_cover_letter(
        &self,
        user: &users::Model,
        id: i32,
    ) -> Result<(), ArtifactError> {
        let deleted = self.store.delete_cover_letter(user.id, id).await?;
        if deleted {
            Ok(())
        } else {
            Err(ArtifactError::NotFound("Cover letter"))
        }
    }

    async fn record_assessment(
        &self,
        user: &users::Model,
        input: AssessmentInput,
    ) -> Result<assessments::Model, ArtifactError> {
        if let Some(score) = input.score
            && !(0..=100).contains(&score)
        {
            return Err(ArtifactError::Validation(format!(
                "Score must be between 0 and 100, got {score}"
            )));
        }

        Ok(self.store.create_assessment(user.id, &input).await?)
    }

    async fn list_assessments(
        &self,
        user: &users::Model,
    ) -> Result<Vec<assessments::Model>, ArtifactError> {
        Ok(self.store.list_assessments(user.id).await?)
    }

    async fn get_insight(
        &self,
        user: &users::Model,
    ) -> Result<Option<industry_insights::Model>, ArtifactError> {
        Ok(self.store.get_insight(user.id).await?)
    }

    async fn save_insight(
        &self,
        user: &users::Model,
        industry: Option<&str>,
        insights: Option<&str>,
    ) -> Result<industry_insights::Model, ArtifactError> {
        if let Some(payload) = insights {
            serde_json::from_str::<serde_json::Value>(payload).map_err(|e| {
                ArtifactError::Validation(format!("Insight payload is not JSON: {e}"))
            })?;
        }

        Ok(self.store.upsert_insight(user.id, industry, insights).await?)
    }

    async fn onboarding_status(
        &self,
        user: &users::Model,
    ) -> Result<OnboardingStatus, ArtifactError> {
        // Refetch: the session-scoped user model may be stale.
        let current = self
            .store
            .get_user_by_id(user.id)
            .await?
            .ok_or(ArtifactError::NotFound("User"))?;

        Ok(OnboardingStatus {
            is_onboarded: current.industry.is_some(),
            industry: current.industry,
        })
    }

    async fn set_industry(
        &self,
        user: &users::Model,
        industry: &str,
    ) -> Result<users::Model, ArtifactError> {
        if industry.trim().is_empty() {
            return Err(ArtifactError::Validation(
                "Industry cannot be empty".to_string(),
            ));
        }

        let updated = self.store.set_user_industry(user.id, industry).await?;

        // Keep the one-to-one insight row aligned with the user's choice.
        // Stored insights survive only if the industry is unchanged; a
        // switch invalidates them.
        let existing = self.store.get_insight(user.id).await?;
        let insights = existing
            .filter(|row| row.industry.as_deref() == Some(industry))
            .and_then(|row| row.insights);
        self.store
            .upsert_insight(user.id, Some(industry), insights.as_deref())
            .await?;

        Ok(updated)
    }
}

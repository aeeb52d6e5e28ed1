use serde::{Deserialize, Serialize};

use crate::config::EnvironmentSummary;
use crate::entities::{assessments, cover_letters, industry_insights, resumes, users};
use crate::services::OnboardingStatus;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub clerk_user_id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub industry: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<users::Model> for UserDto {
    fn from(m: users::Model) -> Self {
        Self {
            id: m.id,
            clerk_user_id: m.clerk_user_id,
            name: m.name,
            email: m.email,
            image_url: m.image_url,
            industry: m.industry,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OnboardingDto {
    pub is_onboarded: bool,
    pub industry: Option<String>,
}

impl From<OnboardingStatus> for OnboardingDto {
    fn from(s: OnboardingStatus) -> Self {
        Self {
            is_onboarded: s.is_onboarded,
            industry: s.industry,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeDto {
    pub id: i32,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<resumes::Model> for ResumeDto {
    fn from(m: resumes::Model) -> Self {
        Self {
            id: m.id,
            content: m.content,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoverLetterDto {
    pub id: i32,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub content: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<cover_letters::Model> for CoverLetterDto {
    fn from(m: cover_letters::Model) -> Self {
        Self {
            id: m.id,
            job_title: m.job_title,
            company_name: m.company_name,
            content: m.content,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssessmentDto {
    pub id: i32,
    pub category: Option<String>,
    pub questions: Option<String>,
    pub answers: Option<String>,
    pub feedback: Option<String>,
    pub score: Option<i32>,
    pub created_at: String,
}

impl From<assessments::Model> for AssessmentDto {
    fn from(m: assessments::Model) -> Self {
        Self {
            id: m.id,
            category: m.category,
            questions: m.questions,
            answers: m.answers,
            feedback: m.feedback,
            score: m.score,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InsightDto {
    pub id: i32,
    pub industry: Option<String>,
    pub insights: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<industry_insights::Model> for InsightDto {
    fn from(m: industry_insights::Model) -> Self {
        Self {
            id: m.id,
            industry: m.industry,
            insights: m.insights,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImprovedContentDto {
    pub improved: String,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub environment: EnvironmentSummary,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct DbHealthReport {
    pub status: String,
    pub database: String,
    pub tables: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct SetupReport {
    pub status: String,
    pub tables_created: bool,
    pub tables: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ArtifactCountsDto {
    pub users: u64,
    pub resumes: u64,
    pub cover_letters: u64,
    pub assessments: u64,
    pub industry_insights: u64,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub counts: ArtifactCountsDto,
}

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    #[serde(rename = "type")]
    pub content_type: String,
    pub current: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCoverLetterRequest {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordAssessmentRequest {
    pub category: Option<String>,
    pub questions: Option<serde_json::Value>,
    pub answers: Option<serde_json::Value>,
    pub feedback: Option<String>,
    pub score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SaveInsightRequest {
    pub industry: Option<String>,
    pub insights: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct SetIndustryRequest {
    pub industry: String,
}

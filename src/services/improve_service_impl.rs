use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::clients::gemini::GeminiClient;
use crate::entities::users;
use crate::services::improve_service::{ImproveError, ImproveService};

/// Industry used in the prompt when the user has not finished onboarding.
const DEFAULT_INDUSTRY: &str = "general";

pub struct GeminiImproveService {
    gemini: Arc<GeminiClient>,
}

impl GeminiImproveService {
    #[must_use]
    pub fn new(gemini: Arc<GeminiClient>) -> Self {
        Self { gemini }
    }
}

fn build_prompt(section: &str, industry: &str, current: &str) -> String {
    format!(
        r#"As an expert resume writer, improve the following {section} description for a {industry} professional.
Make it more impactful, quantifiable, and aligned with industry standards.
Current content: "{current}"

Requirements:
1. Use action verbs
2. Include metrics and results where possible
3. Highlight relevant technical skills
4. Keep it concise but detailed
5. Focus on achievements over responsibilities
6. Use industry-specific keywords

Format the response as a single paragraph without any additional text or explanations."#
    )
}

#[async_trait]
impl ImproveService for GeminiImproveService {
    async fn improve(
        &self,
        user: &users::Model,
        section: &str,
        current: &str,
    ) -> Result<String, ImproveError> {
        if current.trim().is_empty() {
            return Err(ImproveError::Validation(
                "Current content cannot be empty".to_string(),
            ));
        }
        if section.trim().is_empty() {
            return Err(ImproveError::Validation(
                "Content type cannot be empty".to_string(),
            ));
        }

        let industry = user.industry.as_deref().unwrap_or(DEFAULT_INDUSTRY);
        let prompt = build_prompt(section, industry, current);

        debug!(
            "Requesting improvement of {section} content for user {} ({industry})",
            user.id
        );

        self.gemini
            .generate(&prompt)
            .await
            .map_err(ImproveError::Upstream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_section_industry_and_content() {
        let prompt = build_prompt("summary", "tech-software-development", "I write code");

        assert!(prompt.starts_with(
            "As an expert resume writer, improve the following summary description \
             for a tech-software-development professional."
        ));
        assert!(prompt.contains("Current content: \"I write code\""));
        assert!(prompt.ends_with(
            "Format the response as a single paragraph without any additional text or explanations."
        ));
    }

    #[test]
    fn prompt_lists_all_requirements() {
        let prompt = build_prompt("experience", "general", "Did stuff");

        for requirement in [
            "1. Use action verbs",
            "2. Include metrics and results where possible",
            "3. Highlight relevant technical skills",
            "4. Keep it concise but detailed",
            "5. Focus on achievements over responsibilities",
            "6. Use industry-specific keywords",
        ] {
            assert!(prompt.contains(requirement), "missing: {requirement}");
        }
    }
}

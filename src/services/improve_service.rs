use async_trait::async_trait;
use thiserror::Error;

use crate::entities::users;

#[derive(Debug, Error)]
pub enum ImproveError {
    #[error("Invalid improvement request: {0}")]
    Validation(String),
    #[error("Text generation failed: {0}")]
    Upstream(#[source] anyhow::Error),
}

/// AI-assisted rewriting of a single resume section.
#[async_trait]
pub trait ImproveService: Send + Sync {
    /// Rewrites `current` in the voice of the user's industry. `section`
    /// names the kind of content being improved ("summary", "experience").
    async fn improve(
        &self,
        user: &users::Model,
        section: &str,
        current: &str,
    ) -> Result<String, ImproveError>;
}

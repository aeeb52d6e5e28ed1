//! Clerk-backed implementation of the `IdentityService` trait.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::clients::clerk::ClerkClient;
use crate::db::{Store, UserProfile};
use crate::entities::users;
use crate::services::identity_service::{IdentityError, IdentityService};

pub struct ClerkIdentityService {
    store: Store,
    clerk: Arc<ClerkClient>,
}

impl ClerkIdentityService {
    #[must_use]
    pub const fn new(store: Store, clerk: Arc<ClerkClient>) -> Self {
        Self { store, clerk }
    }

    /// Verify the token with the provider and return the provider user id.
    async fn verify(&self, token: &str) -> Result<String, IdentityError> {
        if token.is_empty() {
            return Err(IdentityError::Unauthorized);
        }

        let claims = self
            .clerk
            .verify_session(token)
            .await
            .map_err(IdentityError::Provider)?
            .ok_or(IdentityError::Unauthorized)?;

        Ok(claims.user_id)
    }
}

#[async_trait]
impl IdentityService for ClerkIdentityService {
    async fn resolve(&self, token: &str) -> Result<users::Model, IdentityError> {
        let clerk_user_id = self.verify(token).await?;

        // Fast path: mirror already exists, no profile fetch needed.
        if let Some(user) = self
            .store
            .get_user_by_clerk_id(&clerk_user_id)
            .await
            .map_err(IdentityError::Database)?
        {
            return Ok(user);
        }

        let profile = self
            .clerk
            .get_user(&clerk_user_id)
            .await
            .map_err(IdentityError::Provider)?
            .ok_or(IdentityError::Unauthorized)?;

        let email = profile
            .primary_email()
            .ok_or_else(|| {
                IdentityError::Provider(anyhow::anyhow!(
                    "Provider profile {clerk_user_id} has no email address"
                ))
            })?
            .to_string();

        let user = self
            .store
            .upsert_user_mirror(&UserProfile {
                clerk_user_id: clerk_user_id.clone(),
                name: profile.display_name(),
                email,
                image_url: profile.image_url.clone(),
            })
            .await
            .map_err(IdentityError::Database)?;

        info!("Provisioned local mirror for provider user {clerk_user_id}");
        Ok(user)
    }

    async fn current(&self, token: &str) -> Result<users::Model, IdentityError> {
        let clerk_user_id = self.verify(token).await?;

        debug!("Looking up mirror for provider user {clerk_user_id}");

        self.store
            .get_user_by_clerk_id(&clerk_user_id)
            .await
            .map_err(IdentityError::Database)?
            .ok_or(IdentityError::UserNotFound)
    }
}

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClerkConfig;

/// Claims returned by the token-verification endpoint.
#[derive(Debug, Deserialize)]
pub struct SessionClaims {
    /// The identity-provider user id the session belongs to.
    #[serde(alias = "sub")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
struct VerifyTokenRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ClerkEmailAddress {
    pub id: String,
    pub email_address: String,
}

#[derive(Debug, Deserialize)]
pub struct ClerkUser {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<ClerkEmailAddress>,
}

impl ClerkUser {
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.id.clone(),
        }
    }

    /// Primary email address, falling back to the first one on file.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        if let Some(primary_id) = &self.primary_email_address_id
            && let Some(email) = self
                .email_addresses
                .iter()
                .find(|e| &e.id == primary_id)
        {
            return Some(&email.email_address);
        }

        self.email_addresses
            .first()
            .map(|e| e.email_address.as_str())
    }
}

/// Thin HTTP client for the Clerk backend API.
///
/// Session verification and profile lookup are external calls by design;
/// no token parsing happens locally.
#[derive(Clone)]
pub struct ClerkClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl ClerkClient {
    #[must_use]
    pub fn new(config: &ClerkConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.request_timeout_seconds.into(),
            ))
            .build()
            .unwrap_or_default();

        Self::with_shared_client(client, config)
    }

    #[must_use]
    pub fn with_shared_client(client: Client, config: &ClerkConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        }
    }

    /// Verify an opaque session token. `Ok(None)` means the token is
    /// invalid or expired; errors are reserved for provider failures.
    pub async fn verify_session(&self, token: &str) -> Result<Option<SessionClaims>> {
        let url = format!("{}/v1/tokens/verify", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&VerifyTokenRequest { token })
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.json().await?)),
            reqwest::StatusCode::UNAUTHORIZED
            | reqwest::StatusCode::NOT_FOUND
            | reqwest::StatusCode::BAD_REQUEST => Ok(None),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(anyhow::anyhow!("Clerk API error: {} - {}", status, body))
            }
        }
    }

    pub async fn get_user(&self, clerk_user_id: &str) -> Result<Option<ClerkUser>> {
        let url = format!("{}/v1/users/{}", self.base_url, clerk_user_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Clerk API error: {} - {}", status, body));
        }

        Ok(Some(response.json().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_full_name() {
        let user = ClerkUser {
            id: "user_1".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            image_url: None,
            primary_email_address_id: None,
            email_addresses: vec![],
        };
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn display_name_falls_back_to_provider_id() {
        let user = ClerkUser {
            id: "user_1".to_string(),
            first_name: None,
            last_name: None,
            image_url: None,
            primary_email_address_id: None,
            email_addresses: vec![],
        };
        assert_eq!(user.display_name(), "user_1");
    }

    #[test]
    fn primary_email_respects_primary_id() {
        let user = ClerkUser {
            id: "user_1".to_string(),
            first_name: None,
            last_name: None,
            image_url: None,
            primary_email_address_id: Some("em_2".to_string()),
            email_addresses: vec![
                ClerkEmailAddress {
                    id: "em_1".to_string(),
                    email_address: "old@example.com".to_string(),
                },
                ClerkEmailAddress {
                    id: "em_2".to_string(),
                    email_address: "main@example.com".to_string(),
                },
            ],
        };
        assert_eq!(user.primary_email(), Some("main@example.com"));
    }
}

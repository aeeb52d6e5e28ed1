//! Domain service for resolving inbound sessions to local users.
//!
//! The identity provider (Clerk) owns authentication; this service turns a
//! verified session into the local mirror row, provisioning it on first
//! sight.

use thiserror::Error;

use crate::entities::users;

/// Errors specific to identity resolution.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No session token, or the provider rejected it.
    #[error("Unauthorized")]
    Unauthorized,

    /// The session is valid but no local mirror exists and creation was
    /// not requested.
    #[error("User not found")]
    UserNotFound,

    /// The identity provider was unreachable or returned a server error.
    #[error("Identity provider error: {0}")]
    Provider(#[source] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[source] anyhow::Error),
}

/// Domain service trait for identity resolution.
#[async_trait::async_trait]
pub trait IdentityService: Send + Sync {
    /// Resolves a session token to the local user, creating the mirror row
    /// on first sight.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unauthorized`] for missing/invalid sessions
    /// and [`IdentityError::Provider`] when the provider call fails.
    async fn resolve(&self, token: &str) -> Result<users::Model, IdentityError>;

    /// Lookup-only variant: never provisions.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UserNotFound`] when the session is valid
    /// but the mirror row has not been created yet.
    async fn current(&self, token: &str) -> Result<users::Model, IdentityError>;
}

//! Domain service for system-level operations.
//!
//! Handles liveness probes, database diagnostics, and on-demand schema setup.

use thiserror::Error;

use crate::api::types::{DbHealthReport, HealthReport, SetupReport, SystemStatus};

/// Errors specific to system operations.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Database error: {0}")]
    Database(#[source] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for SystemError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err)
    }
}

/// Domain service trait for system operations.
#[async_trait::async_trait]
pub trait SystemService: Send + Sync {
    /// Liveness probe. Reports which external credentials are configured
    /// without touching the database.
    async fn health(&self) -> Result<HealthReport, SystemError>;

    /// Database connectivity probe: round-trips a query and lists the
    /// tables currently present.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Database`] when the connection is down.
    async fn db_health(&self) -> Result<DbHealthReport, SystemError>;

    /// Creates any missing tables. Idempotent: a second call reports
    /// `tables_created = false` and changes nothing.
    async fn setup(&self) -> Result<SetupReport, SystemError>;

    /// Aggregated status: version, uptime, and per-table row counts.
    async fn status(&self, uptime_secs: u64, version: &str) -> Result<SystemStatus, SystemError>;
}

//! `SeaORM` implementation of the `SystemService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::api::types::{ArtifactCountsDto, DbHealthReport, HealthReport, SetupReport, SystemStatus};
use crate::config::Config;
use crate::db::Store;
use crate::services::system_service::{SystemError, SystemService};

pub struct SeaOrmSystemService {
    store: Store,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmSystemService {
    #[must_use]
    pub const fn new(store: Store, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl SystemService for SeaOrmSystemService {
    async fn health(&self) -> Result<HealthReport, SystemError> {
        let summary = {
            let config = self.config.read().await;
            config.environment_summary()
        };

        Ok(HealthReport {
            status: "ok".to_string(),
            environment: summary,
            message: "Service is running".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    async fn db_health(&self) -> Result<DbHealthReport, SystemError> {
        if let Err(e) = self.store.ping().await {
            warn!("Database ping failed: {e:#}");
            return Err(SystemError::Database(e));
        }

        let tables = self.store.table_names().await?;

        Ok(DbHealthReport {
            status: "ok".to_string(),
            database: "connected".to_string(),
            tables,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    async fn setup(&self) -> Result<SetupReport, SystemError> {
        let tables_created = self.store.bootstrap_schema().await?;
        let tables = self.store.table_names().await?;

        if tables_created {
            info!("Schema setup created missing tables");
        } else {
            info!("Schema setup found all tables present");
        }

        Ok(SetupReport {
            status: "ok".to_string(),
            tables_created,
            tables,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    async fn status(&self, uptime_secs: u64, version: &str) -> Result<SystemStatus, SystemError> {
        let counts = self.store.artifact_counts().await?;

        Ok(SystemStatus {
            version: version.to_string(),
            uptime: uptime_secs,
            counts: ArtifactCountsDto {
                users: counts.users,
                resumes: counts.resumes,
                cover_letters: counts.cover_letters,
                assessments: counts.assessments,
                industry_insights: counts.industry_insights,
            },
        })
    }
}

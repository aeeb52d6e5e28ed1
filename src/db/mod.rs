use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait,
    PaginatorTrait, Statement,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::assessment::AssessmentInput;
pub use repositories::cover_letter::CoverLetterInput;
pub use repositories::user::UserProfile;

use crate::entities::{assessments, cover_letters, industry_insights, resumes, users};

/// The five tables the schema bootstrap manages.
const EXPECTED_TABLES: [&str; 5] = [
    "users",
    "resumes",
    "cover_letters",
    "assessments",
    "industry_insights",
];

/// Per-table row counts for the status endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactCounts {
    pub users: u64,
    pub resumes: u64,
    pub cover_letters: u64,
    pub assessments: u64,
    pub industry_insights: u64,
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        // SQLite needs the file (and its directory) to exist up front.
        if let Some(path_str) = db_url.strip_prefix("sqlite:")
            && !path_str.starts_with(":memory:")
        {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// List user-visible table names, backend-appropriately.
    pub async fn table_names(&self) -> Result<Vec<String>> {
        let backend = self.conn.get_database_backend();

        let sql = match backend {
            DbBackend::Sqlite => {
                "SELECT name FROM sqlite_master WHERE type = 'table' \
                 AND name NOT LIKE 'sqlite_%'"
            }
            _ => {
                "SELECT table_name AS name FROM information_schema.tables \
                 WHERE table_schema = 'public' AND table_type = 'BASE TABLE'"
            }
        };

        let rows = self
            .conn
            .query_all(Statement::from_string(backend, sql.to_string()))
            .await?;

        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("", "name")?;
            if name != "seaql_migrations" {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Re-run the schema bootstrap. Returns `true` when any of the expected
    /// tables had to be created; a second invocation is a no-op.
    pub async fn bootstrap_schema(&self) -> Result<bool> {
        use sea_orm_migration::MigratorTrait;

        let before = self.table_names().await?;
        let missing = EXPECTED_TABLES
            .iter()
            .any(|t| !before.iter().any(|name| name == t));

        migrator::Migrator::up(&self.conn, None).await?;

        Ok(missing)
    }

    pub async fn artifact_counts(&self) -> Result<ArtifactCounts> {
        use crate::entities::prelude::{
            Assessments, CoverLetters, IndustryInsights, Resumes, Users,
        };

        Ok(ArtifactCounts {
            users: Users::find().count(&self.conn).await?,
            resumes: Resumes::find().count(&self.conn).await?,
            cover_letters: CoverLetters::find().count(&self.conn).await?,
            assessments: Assessments::find().count(&self.conn).await?,
            industry_insights: IndustryInsights::find().count(&self.conn).await?,
        })
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn resume_repo(&self) -> repositories::resume::ResumeRepository {
        repositories::resume::ResumeRepository::new(self.conn.clone())
    }

    fn cover_letter_repo(&self) -> repositories::cover_letter::CoverLetterRepository {
        repositories::cover_letter::CoverLetterRepository::new(self.conn.clone())
    }

    fn assessment_repo(&self) -> repositories::assessment::AssessmentRepository {
        repositories::assessment::AssessmentRepository::new(self.conn.clone())
    }

    fn insight_repo(&self) -> repositories::insight::InsightRepository {
        repositories::insight::InsightRepository::new(self.conn.clone())
    }

    // ========== Users ==========

    pub async fn get_user_by_clerk_id(&self, clerk_user_id: &str) -> Result<Option<users::Model>> {
        self.user_repo().get_by_clerk_id(clerk_user_id).await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<users::Model>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn upsert_user_mirror(&self, profile: &UserProfile) -> Result<users::Model> {
        self.user_repo().upsert_mirror(profile).await
    }

    pub async fn set_user_industry(&self, user_id: i32, industry: &str) -> Result<users::Model> {
        self.user_repo().set_industry(user_id, industry).await
    }

    // ========== Resumes ==========

    pub async fn get_resume(&self, user_id: i32) -> Result<Option<resumes::Model>> {
        self.resume_repo().get_for_user(user_id).await
    }

    pub async fn upsert_resume(&self, user_id: i32, content: &str) -> Result<resumes::Model> {
        self.resume_repo().upsert(user_id, content).await
    }

    // ========== Cover letters ==========

    pub async fn create_cover_letter(
        &self,
        user_id: i32,
        input: &CoverLetterInput,
    ) -> Result<cover_letters::Model> {
        self.cover_letter_repo().create(user_id, input).await
    }

    pub async fn list_cover_letters(&self, user_id: i32) -> Result<Vec<cover_letters::Model>> {
        self.cover_letter_repo().list_for_user(user_id).await
    }

    pub async fn get_cover_letter(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<Option<cover_letters::Model>> {
        self.cover_letter_repo().get_for_user(user_id, id).await
    }

    pub async fn delete_cover_letter(&self, user_id: i32, id: i32) -> Result<bool> {
        self.cover_letter_repo().delete_for_user(user_id, id).await
    }

    // ========== Assessments ==========

    pub async fn create_assessment(
        &self,
        user_id: i32,
        input: &AssessmentInput,
    ) -> Result<assessments::Model> {
        self.assessment_repo().create(user_id, input).await
    }

    pub async fn list_assessments(&self, user_id: i32) -> Result<Vec<assessments::Model>> {
        self.assessment_repo().list_for_user(user_id).await
    }

    // ========== Industry insights ==========

    pub async fn get_insight(&self, user_id: i32) -> Result<Option<industry_insights::Model>> {
        self.insight_repo().get_for_user(user_id).await
    }

    pub async fn upsert_insight(
        &self,
        user_id: i32,
        industry: Option<&str>,
        insights: Option<&str>,
    ) -> Result<industry_insights::Model> {
        self.insight_repo()
            .upsert(user_id, industry, insights)
            .await
    }
}

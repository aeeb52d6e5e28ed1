use anyhow::{Context, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::entities::{prelude::*, resumes};

pub struct ResumeRepository {
    conn: DatabaseConnection,
}

impl ResumeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Option<resumes::Model>> {
        Resumes::find()
            .filter(resumes::Column::UserId.eq(user_id))
            .one(&self.conn)
            .await
            .context("Failed to query resume")
    }

    /// Insert-or-overwrite the user's resume in one statement.
    ///
    /// The unique index on `user_id` makes this atomic: two concurrent
    /// saves for the same user serialize into one insert and one update.
    pub async fn upsert(&self, user_id: i32, content: &str) -> Result<resumes::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = resumes::ActiveModel {
            user_id: Set(user_id),
            content: Set(content.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Resumes::insert(active)
            .on_conflict(
                OnConflict::column(resumes::Column::UserId)
                    .update_columns([resumes::Column::Content, resumes::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await
            .context("Failed to upsert resume")?;

        debug!("Saved resume for user {}", user_id);

        self.get_for_user(user_id)
            .await?
            .context("Resume missing after upsert")
    }
}

use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entities::{cover_letters, prelude::*};

/// Fields accepted when creating a cover letter.
#[derive(Debug, Clone)]
pub struct CoverLetterInput {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub content: Option<String>,
}

pub struct CoverLetterRepository {
    conn: DatabaseConnection,
}

impl CoverLetterRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &CoverLetterInput,
    ) -> Result<cover_letters::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = cover_letters::ActiveModel {
            user_id: Set(user_id),
            job_title: Set(input.job_title.clone()),
            company_name: Set(input.company_name.clone()),
            content: Set(input.content.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let res = CoverLetters::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to insert cover letter")?;

        info!("Created cover letter {} for user {}", res.last_insert_id, user_id);

        CoverLetters::find_by_id(res.last_insert_id)
            .one(&self.conn)
            .await?
            .context("Cover letter missing after insert")
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<cover_letters::Model>> {
        CoverLetters::find()
            .filter(cover_letters::Column::UserId.eq(user_id))
            .order_by_desc(cover_letters::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list cover letters")
    }

    /// Scoped to the owning user so one user cannot read another's letter.
    pub async fn get_for_user(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<Option<cover_letters::Model>> {
        CoverLetters::find_by_id(id)
            .filter(cover_letters::Column::UserId.eq(user_id))
            .one(&self.conn)
            .await
            .context("Failed to query cover letter")
    }

    pub async fn delete_for_user(&self, user_id: i32, id: i32) -> Result<bool> {
        let res = CoverLetters::delete_many()
            .filter(cover_letters::Column::Id.eq(id))
            .filter(cover_letters::Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await
            .context("Failed to delete cover letter")?;

        Ok(res.rows_affected > 0)
    }
}

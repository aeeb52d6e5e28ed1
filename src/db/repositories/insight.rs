use anyhow::{Context, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{industry_insights, prelude::*};

pub struct InsightRepository {
    conn: DatabaseConnection,
}

impl InsightRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Option<industry_insights::Model>> {
        IndustryInsights::find()
            .filter(industry_insights::Column::UserId.eq(user_id))
            .one(&self.conn)
            .await
            .context("Failed to query industry insight")
    }

    /// One insight row per user; atomic on the `user_id` unique index.
    pub async fn upsert(
        &self,
        user_id: i32,
        industry: Option<&str>,
        insights: Option<&str>,
    ) -> Result<industry_insights::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = industry_insights::ActiveModel {
            user_id: Set(user_id),
            industry: Set(industry.map(str::to_string)),
            insights: Set(insights.map(str::to_string)),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        IndustryInsights::insert(active)
            .on_conflict(
                OnConflict::column(industry_insights::Column::UserId)
                    .update_columns([
                        industry_insights::Column::Industry,
                        industry_insights::Column::Insights,
                        industry_insights::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await
            .context("Failed to upsert industry insight")?;

        self.get_for_user(user_id)
            .await?
            .context("Industry insight missing after upsert")
    }
}

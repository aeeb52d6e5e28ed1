use anyhow::{Context, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::entities::{prelude::*, users};

/// Profile fields mirrored from the identity provider.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub clerk_user_id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_clerk_id(&self, clerk_user_id: &str) -> Result<Option<users::Model>> {
        Users::find()
            .filter(users::Column::ClerkUserId.eq(clerk_user_id))
            .one(&self.conn)
            .await
            .context("Failed to query user by identity-provider id")
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<users::Model>> {
        Users::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by id")
    }

    /// Create-or-refresh the local mirror of an identity-provider user.
    ///
    /// Atomic on `clerk_user_id`: concurrent first-sight requests for the
    /// same user resolve to a single row.
    pub async fn upsert_mirror(&self, profile: &UserProfile) -> Result<users::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = users::ActiveModel {
            clerk_user_id: Set(profile.clerk_user_id.clone()),
            name: Set(profile.name.clone()),
            email: Set(profile.email.clone()),
            image_url: Set(profile.image_url.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Users::insert(active)
            .on_conflict(
                OnConflict::column(users::Column::ClerkUserId)
                    .update_columns([
                        users::Column::Name,
                        users::Column::Email,
                        users::Column::ImageUrl,
                        users::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await
            .context("Failed to upsert user mirror")?;

        self.get_by_clerk_id(&profile.clerk_user_id)
            .await?
            .context("User mirror missing after upsert")
    }

    pub async fn set_industry(&self, user_id: i32, industry: &str) -> Result<users::Model> {
        let user = Users::find_by_id(user_id)
            .one(&self.conn)
            .await
            .context("Failed to query user for industry update")?
            .ok_or_else(|| anyhow::anyhow!("User {user_id} not found"))?;

        let mut active: users::ActiveModel = user.into();
        active.industry = Set(Some(industry.to_string()));
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        active
            .update(&self.conn)
            .await
            .context("Failed to update user industry")
    }
}

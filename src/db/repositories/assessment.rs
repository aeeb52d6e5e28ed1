use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::{assessments, prelude::*};

/// Fields accepted when recording a completed assessment.
#[derive(Debug, Clone)]
pub struct AssessmentInput {
    pub category: Option<String>,
    pub questions: Option<String>,
    pub answers: Option<String>,
    pub feedback: Option<String>,
    pub score: Option<i32>,
}

pub struct AssessmentRepository {
    conn: DatabaseConnection,
}

impl AssessmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &AssessmentInput,
    ) -> Result<assessments::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = assessments::ActiveModel {
            user_id: Set(user_id),
            category: Set(input.category.clone()),
            questions: Set(input.questions.clone()),
            answers: Set(input.answers.clone()),
            feedback: Set(input.feedback.clone()),
            score: Set(input.score),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let res = Assessments::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to insert assessment")?;

        Assessments::find_by_id(res.last_insert_id)
            .one(&self.conn)
            .await?
            .context("Assessment missing after insert")
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<assessments::Model>> {
        Assessments::find()
            .filter(assessments::Column::UserId.eq(user_id))
            .order_by_desc(assessments::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list assessments")
    }
}

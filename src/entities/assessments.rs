use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    /// Quiz category, e.g. "technical" or "behavioural".
    pub category: Option<String>,

    /// Question set as a JSON array.
    #[sea_orm(column_type = "Text", nullable)]
    pub questions: Option<String>,

    /// The user's answers as a JSON array.
    #[sea_orm(column_type = "Text", nullable)]
    pub answers: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,

    pub score: Option<i32>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

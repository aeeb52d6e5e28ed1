use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "industry_insights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// One insight row per user.
    #[sea_orm(unique)]
    pub user_id: i32,

    pub industry: Option<String>,

    /// Provider-specific insight payload as a JSON document.
    #[sea_orm(column_type = "Text", nullable)]
    pub insights: Option<String>,

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

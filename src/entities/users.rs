use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Identity-provider user id (the Clerk `user_...` id this row mirrors).
    #[sea_orm(unique)]
    pub clerk_user_id: String,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub image_url: Option<String>,

    /// Set during onboarding; drives the improve-prompt industry context.
    pub industry: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::resumes::Entity")]
    Resume,
    #[sea_orm(has_many = "super::cover_letters::Entity")]
    CoverLetters,
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
    #[sea_orm(has_one = "super::industry_insights::Entity")]
    IndustryInsight,
}

impl Related<super::resumes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resume.def()
    }
}

impl Related<super::cover_letters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoverLetters.def()
    }
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl Related<super::industry_insights::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndustryInsight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub use super::assessments::Entity as Assessments;
pub use super::cover_letters::Entity as CoverLetters;
pub use super::industry_insights::Entity as IndustryInsights;
pub use super::resumes::Entity as Resumes;
pub use super::users::Entity as Users;

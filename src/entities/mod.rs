pub mod prelude;

pub mod assessments;
pub mod cover_letters;
pub mod industry_insights;
pub mod resumes;
pub mod users;

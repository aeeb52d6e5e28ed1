pub mod clerk;
pub mod gemini;

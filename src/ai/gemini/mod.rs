pub mod course;
pub mod types;

pub use course::GeminiCourseClient;

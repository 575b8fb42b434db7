//! AI service integration for course outline generation
//!
//! Provides the [`ContentService`] seam used by the backend, a Gemini REST
//! implementation, and a scriptable mock.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiCourseClient;
pub use mock::MockContentClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContentService: Send + Sync {
    /// Generate the raw syllabus text for an already validated course title.
    async fn generate_course(&self, title: &str) -> Result<String>;
}

//! Backend side of `POST /api/generate`.
//!
//! Shared by the JSON route and the in-process presenter transport so both
//! produce identical status codes and bodies.

use crate::ai::ContentService;
use crate::models::{ApiReply, CourseTitle, GenerateReply, GenerateRequest};
use crate::Error;
use tracing::{error, info};

/// Parse a raw request body. Anything unreadable counts as an empty request.
pub fn parse_request(body: &[u8]) -> GenerateRequest {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Validate the title, generate the outline, and shape the reply.
pub async fn generate_reply(service: &dyn ContentService, request: &GenerateRequest) -> ApiReply {
    let title = match CourseTitle::parse(&request.title) {
        Ok(title) => title,
        Err(err) => return ApiReply::new(400, GenerateReply::error(err.to_string())),
    };

    info!(title = %title, "Generating course outline");

    match service.generate_course(title.as_str()).await {
        Ok(content) => ApiReply::new(200, GenerateReply::content(title.as_str(), content.trim())),
        Err(Error::Validation(message)) => ApiReply::new(400, GenerateReply::error(message)),
        Err(err) => {
            error!(title = %title, "Course generation failed: {}", err);
            ApiReply::new(500, GenerateReply::error(err.to_string()))
        }
    }
}

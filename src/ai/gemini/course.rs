use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::ai::ContentService;
use crate::models::GenerationSettings;
use crate::{templates, Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Long outlines can take a while at 3000 output tokens.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Generates course outlines through Gemini's `generateContent` endpoint.
pub struct GeminiCourseClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    settings: GenerationSettings,
}

impl GeminiCourseClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, Client::new())
    }

    /// `model` may be given bare (`gemini-1.5-flash`) or as `models/gemini-1.5-flash`.
    pub fn new_with_client(api_key: String, model: String, client: Client) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();
        let endpoint = Self::endpoint_for(DEFAULT_BASE_URL, &model);

        Self {
            client,
            api_key,
            model,
            endpoint,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.endpoint = Self::endpoint_for(&base_url, &self.model);
        self
    }

    fn endpoint_for(base_url: &str, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", base_url, model)
    }

    fn outline_request(&self, title: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(templates::course_prompt(title))],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl ContentService for GeminiCourseClient {
    async fn generate_course(&self, title: &str) -> Result<String> {
        tracing::debug!(model = %self.model, "Requesting course outline from Gemini");

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.outline_request(title))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %self.model, "Gemini request failed: {}", e);
                e
            })?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            tracing::error!(%status, "Gemini rejected outline request: {}", raw);
            return Err(Error::AiProvider(format!(
                "Gemini API error (status {}): {}",
                status, raw
            )));
        }

        let outline: GenerateContentResponse = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Unreadable Gemini outline response: {}", e);
            Error::AiProvider(format!("Failed to parse Gemini response: {}", e))
        })?;

        outline
            .text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| Error::AiProvider("No text in Gemini response".to_string()))
    }
}

//! [`GenerateApi`] implementations: over HTTP, and in-process.

use super::GenerateApi;
use crate::ai::ContentService;
use crate::course;
use crate::models::{ApiReply, GenerateReply, GenerateRequest};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

/// Posts to a running server's `/api/generate`.
///
/// The client is built without a timeout; a request waits until the network
/// layer settles.
pub struct HttpGenerateApi {
    client: Client,
    endpoint: String,
}

impl HttpGenerateApi {
    pub fn new(base_url: &str) -> Self {
        Self::new_with_client(base_url, Client::new())
    }

    pub fn new_with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerateApi for HttpGenerateApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<ApiReply> {
        tracing::debug!(endpoint = %self.endpoint, "Posting generate request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let body: Value =
            serde_json::from_slice(&body).map_err(|e| Error::Transport(e.to_string()))?;

        reply_from_json(status, body)
    }
}

/// Shape a decoded body into an [`ApiReply`].
///
/// Only a JSON object carries reply fields; any other value leaves the body
/// empty. An error status with a `null` body has no error field to read and
/// is reported as a transport failure.
fn reply_from_json(status: u16, body: Value) -> Result<ApiReply> {
    match body {
        Value::Object(_) => {
            let body: GenerateReply =
                serde_json::from_value(body).map_err(|e| Error::Transport(e.to_string()))?;
            Ok(ApiReply::new(status, body))
        }
        Value::Null if !(200..300).contains(&status) => Err(Error::Transport(format!(
            "unreadable error reply (status {}): null body",
            status
        ))),
        _ => Ok(ApiReply::without_body(status)),
    }
}

/// Calls the backend handler directly, without a network hop.
pub struct LocalGenerateApi {
    service: Arc<dyn ContentService>,
}

impl LocalGenerateApi {
    pub fn new(service: Arc<dyn ContentService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl GenerateApi for LocalGenerateApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<ApiReply> {
        Ok(course::generate_reply(self.service.as_ref(), request).await)
    }
}

//! Application wiring: configuration, content service, and the HTTP server.

use crate::ai::{ContentService, GeminiCourseClient};
use crate::models::Config;
use crate::server::{build_router, AppState};
use crate::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub struct App {
    service: Arc<dyn ContentService>,
    addr: SocketAddr,
}

impl App {
    /// Build an app around any content service.
    ///
    /// Used by tests and harnesses that inject mocks.
    pub fn with_service(service: Arc<dyn ContentService>, addr: SocketAddr) -> Self {
        Self { service, addr }
    }

    /// Construct an app from configuration, backed by Gemini.
    pub fn from_config(config: Config) -> Result<Self> {
        let addr = config.bind_addr()?;
        let client = GeminiCourseClient::new(config.gemini_api_key, config.gemini_model)
            .with_settings(config.generation);
        info!("Content provider: Gemini (model: {})", client.model());

        Ok(Self::with_service(Arc::new(client), addr))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn router(&self) -> Router {
        build_router(Arc::new(AppState {
            service: self.service.clone(),
        }))
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        info!("Starting app on http://{}", addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationSettings;

    fn test_config() -> Config {
        Config {
            gemini_api_key: "key".to_string(),
            gemini_model: "models/gemini-1.5-flash".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            generation: GenerationSettings::default(),
        }
    }

    #[test]
    fn test_from_config_uses_bind_address() {
        let mut config = test_config();
        config.port = 9123;

        let app = App::from_config(config).unwrap();
        assert_eq!(app.addr().to_string(), "127.0.0.1:9123");
    }

    #[test]
    fn test_from_config_rejects_bad_host() {
        let mut config = test_config();
        config.host = "not a host".to_string();

        assert!(App::from_config(config).is_err());
    }
}

//! Request lifecycle for one course generation at a time.
//!
//! The presenter reads the title from a [`View`], posts it through a
//! [`GenerateApi`], renders the reply, and reflects progress in the view's
//! status line. Busy state (trigger disabled, status pulsing) is held by a
//! drop guard so it is released on every exit path.

pub mod mock;
pub mod render;
pub mod transport;
pub mod view;

pub use mock::MockGenerateApi;
pub use transport::{HttpGenerateApi, LocalGenerateApi};
pub use view::PageView;

use crate::models::{ApiReply, GenerateRequest};
use crate::Result;
use async_trait::async_trait;
use std::ops::{Deref, DerefMut};
use tracing::{debug, info, warn};

pub const VALIDATION_MESSAGE: &str = "Please enter a course title.";
pub const IN_PROGRESS_MESSAGE: &str = "Generating...";
pub const DONE_MESSAGE: &str = "Done.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error.";
pub const NETWORK_ERROR_PREFIX: &str = "Network error: ";

/// The display surface the presenter drives.
pub trait View {
    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);
    fn set_status(&mut self, status: &str);
    fn set_pulsing(&mut self, pulsing: bool);
    fn set_results(&mut self, html: &str);
    fn set_trigger_enabled(&mut self, enabled: bool);
}

/// Outbound half of `POST /api/generate`.
///
/// `Ok` carries any reply that was received and parsed, whatever its status.
/// `Err` means no readable reply arrived; its `Display` is shown to the user.
#[async_trait]
pub trait GenerateApi: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<ApiReply>;
}

/// UI state projected into the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    ValidationFailed,
    InFlight,
    Success,
    ServerError(String),
    NetworkFailure(String),
}

impl Status {
    pub fn label(&self) -> &str {
        match self {
            Status::Idle => "",
            Status::ValidationFailed => VALIDATION_MESSAGE,
            Status::InFlight => IN_PROGRESS_MESSAGE,
            Status::Success => DONE_MESSAGE,
            Status::ServerError(message) | Status::NetworkFailure(message) => message.as_str(),
        }
    }
}

/// Holds the view busy for the lifetime of one request.
struct BusyGuard<'a, V: View> {
    view: &'a mut V,
}

impl<'a, V: View> BusyGuard<'a, V> {
    fn acquire(view: &'a mut V) -> Self {
        view.set_trigger_enabled(false);
        view.set_pulsing(true);
        Self { view }
    }
}

impl<V: View> Deref for BusyGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &*self.view
    }
}

impl<V: View> DerefMut for BusyGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut *self.view
    }
}

impl<V: View> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_trigger_enabled(true);
        self.view.set_pulsing(false);
    }
}

pub struct Presenter<V: View, A: GenerateApi> {
    view: V,
    api: A,
    status: Status,
}

impl<V: View, A: GenerateApi> Presenter<V, A> {
    pub fn new(view: V, api: A) -> Self {
        Self {
            view,
            api,
            status: Status::Idle,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Run one generation from the title currently in the view.
    pub async fn generate(&mut self) -> Status {
        let title = self.view.title().trim().to_string();
        if title.is_empty() {
            self.view.set_status(VALIDATION_MESSAGE);
            self.status = Status::ValidationFailed;
            return self.status.clone();
        }

        let mut view = BusyGuard::acquire(&mut self.view);
        view.set_status(IN_PROGRESS_MESSAGE);
        view.set_results("");
        self.status = Status::InFlight;

        info!(title = %title, "Requesting course outline");
        let request = GenerateRequest::new(title);

        let status = match self.api.generate(&request).await {
            Ok(reply) if reply.is_success() => {
                view.set_results(&render::render_content(reply.body.as_ref()));
                view.set_status(DONE_MESSAGE);
                Status::Success
            }
            Ok(reply) => {
                let message = reply
                    .error()
                    .filter(|e| !e.is_empty())
                    .unwrap_or(SERVER_ERROR_MESSAGE)
                    .to_string();
                warn!(status = reply.status, "Server rejected generation: {}", message);
                view.set_status(&message);
                Status::ServerError(message)
            }
            Err(err) => {
                let message = format!("{}{}", NETWORK_ERROR_PREFIX, err);
                warn!("Generation request failed: {}", err);
                view.set_status(&message);
                Status::NetworkFailure(message)
            }
        };
        drop(view);

        debug!(?status, "Generation settled");
        self.status = status;
        self.status.clone()
    }

    /// Reset title, status and results. No network activity.
    pub fn clear(&mut self) {
        self.view.set_title("");
        self.view.set_status("");
        self.view.set_results("");
        self.status = Status::Idle;
    }
}

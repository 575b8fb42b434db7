use super::ContentService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scriptable [`ContentService`] for tests and offline runs.
///
/// Responses cycle in order; a queued failure is returned once and then
/// removed. Clones share state, so a second clone can observe calls.
#[derive(Clone)]
pub struct MockContentClient {
    responses: Arc<Mutex<Vec<String>>>,
    failures: Arc<Mutex<Vec<String>>>,
    titles: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockContentClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(Vec::new())),
            titles: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.failures.lock().unwrap().push(message.into());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }
}

impl Default for MockContentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentService for MockContentClient {
    async fn generate_course(&self, title: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.titles.lock().unwrap().push(title.to_string());

        {
            let mut failures = self.failures.lock().unwrap();
            if !failures.is_empty() {
                return Err(Error::AiProvider(failures.remove(0)));
            }
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!(
                "**Objective of the Course:**\nAn overview of {}.\n- first topic\n1. first week",
                title
            ))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

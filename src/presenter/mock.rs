use super::GenerateApi;
use crate::models::{ApiReply, GenerateReply, GenerateRequest};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scriptable [`GenerateApi`]. Queued outcomes are consumed in order; once the
/// queue is empty every call succeeds with a short outline echoing the title.
#[derive(Clone)]
pub struct MockGenerateApi {
    outcomes: Arc<Mutex<VecDeque<Result<ApiReply>>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockGenerateApi {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(self, reply: ApiReply) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(reply));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockGenerateApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerateApi for MockGenerateApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<ApiReply> {
        self.requests.lock().unwrap().push(request.clone());

        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| {
            Ok(ApiReply::new(
                200,
                GenerateReply::content(
                    request.title.clone(),
                    format!("**{}**\n- overview", request.title),
                ),
            ))
        })
    }
}

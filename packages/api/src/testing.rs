//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use store::MemoryTokenStore;

use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::{ApiClient, ApiError};

pub(crate) const BASE_URL: &str = "http://api.test/api/v1";

/// Replays queued responses in order and records every request it receives.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON `body`.
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn fail_network(self) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network("connection refused".to_string())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

pub(crate) fn client(
    transport: &MockTransport,
    tokens: &MemoryTokenStore,
) -> ApiClient<MockTransport, MemoryTokenStore> {
    ApiClient::new(BASE_URL, transport.clone(), tokens.clone())
}

//! Recording transport for unit tests

use super::types::{RawResponse, Request, Transport};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Result<RawResponse>>,
    requests: Vec<Request>,
}

/// Transport that replays queued responses in order and records requests
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response
    pub fn push_json(&self, status: u16, body: Value) -> &Self {
        self.push(Ok(RawResponse::new(status, body.to_string())))
    }

    /// Queue a response with an empty body
    pub fn push_status(&self, status: u16) -> &Self {
        self.push(Ok(RawResponse::new(status, "")))
    }

    /// Queue a response with a raw body
    pub fn push_body(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(RawResponse::new(status, body)))
    }

    /// Queue a transport failure
    pub fn push_failure(&self, message: &str) -> &Self {
        self.push(Err(Error::transport(message)))
    }

    fn push(&self, response: Result<RawResponse>) -> &Self {
        self.state.lock().unwrap().responses.push_back(response);
        self
    }

    /// Requests seen so far, in order
    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: Request) -> Result<RawResponse> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport("no response queued")))
    }
}

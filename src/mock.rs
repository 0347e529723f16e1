//! Mock implementations for testing
//!
//! Provides a canned-response transport for exercising the client and the
//! command handlers without network access.

use crate::api::{RawResponse, Transport};
use crate::error::ApiError;

use std::sync::Mutex;

/// Mock transport returning a fixed outcome and recording requested URLs
#[derive(Debug)]
pub struct MockTransport {
    outcome: Result<RawResponse, ApiError>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Answer every request with 200 and `body`
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::with_status(200, body)
    }

    /// Answer every request with `status` and `body`
    pub fn with_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome: Ok(RawResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request at the transport level
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(ApiError::Unreachable(reason.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// The single URL requested, panicking if there was not exactly one
    pub fn only_request(&self) -> String {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.outcome.clone()
    }
}

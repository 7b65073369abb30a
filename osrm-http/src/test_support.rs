//! Test utilities for the OSRM clients.
//!
//! This module provides [`StubTransport`], a deterministic test double for
//! both transport traits that returns a pre-configured outcome without
//! making actual HTTP requests.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use osrm_core::{AsyncTransport, RawResponse, Transport, TransportError};

/// Base URL reported by every [`StubTransport`].
pub const STUB_BASE_URL: &str = "http://osrm.stub";

/// Stub transport for testing.
///
/// Every request receives the same configured outcome. Requested paths are
/// recorded in call order and shared between clones, so a test can keep a
/// clone while the client owns another.
///
/// # Example
///
/// ```
/// use osrm_core::{NearestOptions, Point, Settings};
/// use osrm_http::OsrmClient;
/// use osrm_http::test_support::StubTransport;
///
/// let stub = StubTransport::with_text(200, r#"{"code": "Ok", "waypoints": []}"#);
/// let client = OsrmClient::with_transport(stub.clone(), Settings::default());
///
/// let nearest = client.nearest(&[Point::new(0.1, 0.2)], &NearestOptions::default());
/// assert!(nearest.is_ok());
/// assert_eq!(stub.requested_paths(), vec!["nearest/v1/driving/0.1,0.2?number=1"]);
/// ```
#[derive(Debug, Clone)]
pub struct StubTransport {
    outcome: StubOutcome,
    requests: Arc<Mutex<Vec<String>>>,
}

#[derive(Debug, Clone)]
enum StubOutcome {
    Response(RawResponse),
    Error(TransportError),
}

impl StubTransport {
    /// Create a transport that answers with `status` and a raw `body`.
    #[must_use]
    pub fn with_body(status: u16, body: Vec<u8>) -> Self {
        Self::with_outcome(StubOutcome::Response(RawResponse::new(status, body)))
    }

    /// Create a transport that answers with `status` and a textual `body`.
    #[must_use]
    pub fn with_text(status: u16, body: &str) -> Self {
        Self::with_body(status, body.as_bytes().to_vec())
    }

    /// Create a transport that fails every request with `error`.
    #[must_use]
    pub fn with_error(error: TransportError) -> Self {
        Self::with_outcome(StubOutcome::Error(error))
    }

    fn with_outcome(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Paths requested so far, in call order.
    #[must_use]
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
        match &self.outcome {
            StubOutcome::Response(response) => Ok(response.clone()),
            StubOutcome::Error(error) => Err(error.clone()),
        }
    }
}

impl Transport for StubTransport {
    fn base_url(&self) -> &str {
        STUB_BASE_URL
    }

    fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.respond(path)
    }
}

#[async_trait(?Send)]
impl AsyncTransport for StubTransport {
    fn base_url(&self) -> &str {
        STUB_BASE_URL
    }

    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.respond(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn clones_share_the_request_log() {
        let stub = StubTransport::with_text(200, "{}");
        let clone = stub.clone();
        Transport::get(&clone, "a").expect("stub answers");
        Transport::get(&clone, "b").expect("stub answers");
        assert_eq!(stub.requested_paths(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[rstest]
    fn errors_are_returned_verbatim() {
        let failure = TransportError::Network {
            url: "http://osrm.stub/x".to_owned(),
            message: "connection reset".to_owned(),
        };
        let stub = StubTransport::with_error(failure.clone());
        assert_eq!(Transport::get(&stub, "x"), Err(failure));
    }
}

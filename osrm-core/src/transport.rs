//! Contract between the clients and their HTTP collaborator.
//!
//! A transport owns the base URL and performs a single `GET` for a relative
//! path, yielding the status code and raw body. It does not interpret the
//! status; that is left to [`crate::interpret()`].

use async_trait::async_trait;

use crate::error::TransportError;

/// Status code and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Bundle a status code with its body.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }
}

/// Blocking HTTP collaborator.
pub trait Transport {
    /// Base URL every path is resolved against.
    fn base_url(&self) -> &str;

    /// Perform a `GET` of `path` relative to [`Self::base_url`].
    ///
    /// # Errors
    /// Returns [`TransportError`] when no response status was received.
    fn get(&self, path: &str) -> Result<RawResponse, TransportError>;
}

/// Suspending HTTP collaborator.
///
/// Futures are not required to be `Send`: the suspending client is driven
/// by a single-threaded cooperative scheduler.
#[async_trait(?Send)]
pub trait AsyncTransport {
    /// Base URL every path is resolved against.
    fn base_url(&self) -> &str;

    /// Perform a `GET` of `path` relative to [`Self::base_url`].
    ///
    /// # Errors
    /// Returns [`TransportError`] when no response status was received.
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError>;
}

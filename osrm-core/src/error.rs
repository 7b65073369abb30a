//! Error taxonomy shared by the blocking and suspending clients.
//!
//! [`ModelError`] covers parse-time failures while materialising a response,
//! [`TransportError`] covers failures reported by the HTTP collaborator and
//! [`OsrmError`] is the single error surfaced by every service call.

use thiserror::Error;

/// Errors raised while building a model entity from decoded JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {message}")]
    InvalidJson {
        /// Decoder diagnostic.
        message: String,
    },
    /// An entity was expected to be a JSON object.
    #[error("expected {entity} to be a JSON object")]
    NotAnObject {
        /// Name of the entity being parsed.
        entity: &'static str,
    },
    /// A required key was absent (or `null`).
    #[error("{entity} is missing required field `{field}`")]
    MissingField {
        /// Name of the entity being parsed.
        entity: &'static str,
        /// Key that was expected.
        field: &'static str,
    },
    /// A key was present but had the wrong shape.
    #[error("{entity} field `{field}` is invalid: {message}")]
    InvalidField {
        /// Name of the entity being parsed.
        entity: &'static str,
        /// Offending key.
        field: &'static str,
        /// Decoder diagnostic.
        message: String,
    },
    /// The service `code` was outside the known set.
    #[error("unknown service status `{value}`")]
    UnknownStatus {
        /// Tag reported by the service.
        value: String,
    },
}

/// Failures reported by the HTTP collaborator.
///
/// These are passed through the clients unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request did not complete before the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Fully qualified request URL.
        url: String,
        /// Timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// Connection, DNS, TLS or body-read failure.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Description supplied by the HTTP backend.
        message: String,
    },
}

/// Errors returned by every OSRM service call.
///
/// Variants are distinguishable programmatically; callers should `match`
/// rather than inspect the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsrmError {
    /// The HTTP collaborator failed before a status was received.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The service answered with a 3xx status.
    #[error("unexpected redirect status code {status}")]
    UnexpectedRedirect {
        /// HTTP status code.
        status: u16,
    },
    /// The service rejected the request with a 4xx status.
    #[error("bad request ({status}): {}: {}", or_dash(.code), or_dash(.message))]
    BadRequest {
        /// HTTP status code.
        status: u16,
        /// OSRM `code` from the body, when present.
        code: Option<String>,
        /// OSRM `message` from the body, when present.
        message: Option<String>,
    },
    /// The service failed with a 5xx status.
    #[error("internal server error {status}: {body}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Raw response body, decoded lossily as UTF-8.
        body: String,
    },
    /// The status code fell outside the 2xx-5xx ranges.
    #[error("unknown response status code {status}")]
    UnknownStatus {
        /// HTTP status code.
        status: u16,
    },
    /// A 2xx body could not be materialised into the response model.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] ModelError),
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

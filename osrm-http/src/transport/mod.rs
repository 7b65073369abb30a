//! reqwest-backed implementations of the transport contract.
//!
//! [`HttpTransport`] serves the suspending client directly;
//! [`BlockingHttpTransport`] wraps it for the blocking client.

mod blocking;
mod http;

pub use blocking::BlockingHttpTransport;
pub use http::HttpTransport;

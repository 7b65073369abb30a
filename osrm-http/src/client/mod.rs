//! Blocking and suspending OSRM clients.
//!
//! Both clients render the request path from the shared request
//! descriptions, hand it to their transport, log the exchange and interpret
//! the raw response. They differ only in how the transport is driven.

mod blocking;
mod suspending;

pub use blocking::OsrmClient;
pub use suspending::OsrmAsyncClient;

use osrm_core::url::join_url;
use osrm_core::{OsrmError, RawResponse, Service, interpret};

/// Log a completed exchange and interpret its response.
fn finish<S: Service>(
    base_url: &str,
    path: &str,
    raw: RawResponse,
) -> Result<S::Response, OsrmError> {
    let url = join_url(base_url, path);
    log::debug!("GET {url} -> {}", raw.status);
    if !(200..300).contains(&raw.status) {
        log::warn!("OSRM request {url} answered with status {}", raw.status);
    }
    interpret(raw)
}

/// Log a failed exchange before handing the error back.
fn transport_failed(base_url: &str, path: &str, error: &osrm_core::TransportError) {
    log::warn!("OSRM request {} failed: {error}", join_url(base_url, path));
}

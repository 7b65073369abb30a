use std::sync::mpsc;

use osrm_core::url::join_url;
use osrm_core::{RawResponse, Transport, TransportError};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::http::HttpTransport;
use crate::config::ClientConfig;
use crate::error::ClientBuildError;

/// Blocking transport that drives [`HttpTransport`] to completion.
///
/// It owns a single-worker Tokio runtime. Every request is spawned onto
/// that runtime, so pooled connections always live on a runtime that is
/// being driven, whichever context the caller blocks from.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the caller simply waits for the spawned
/// request. Inside a multi-threaded runtime (detected via
/// [`Handle::try_current()`] and [`RuntimeFlavor::MultiThread`]) the wait
/// happens in [`tokio::task::block_in_place`] so the caller's worker is
/// handed off. Inside a `current_thread` runtime the caller's thread is
/// blocked for the duration of the request; the request itself still
/// progresses on the owned worker.
///
/// Dropping the transport shuts the owned runtime down in the background,
/// which is permitted from async contexts.
pub struct BlockingHttpTransport {
    inner: HttpTransport,
    handle: Handle,
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for BlockingHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingHttpTransport")
            .field("inner", &self.inner)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl BlockingHttpTransport {
    /// Build a transport for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let inner = HttpTransport::new(config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("osrm-http")
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            inner,
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
        })
    }
}

impl Transport for BlockingHttpTransport {
    fn base_url(&self) -> &str {
        osrm_core::AsyncTransport::base_url(&self.inner)
    }

    fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        let (sender, receiver) = mpsc::sync_channel(1);
        let inner = self.inner.clone();
        let owned_path = path.to_owned();
        self.handle.spawn(async move {
            let outcome = inner.fetch(&owned_path).await;
            if sender.send(outcome).is_err() {
                log::debug!("caller stopped waiting for {owned_path}");
            }
        });

        // block_in_place panics on current_thread runtimes, so only hand off
        // the worker when the caller runs on a multi-threaded one.
        let received = match Handle::try_current() {
            Ok(current) if current.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| receiver.recv())
            }
            _ => receiver.recv(),
        };
        received.map_err(|_| TransportError::Network {
            url: join_url(self.base_url(), path),
            message: "request task ended without a response".to_owned(),
        })?
    }
}

impl Drop for BlockingHttpTransport {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unreachable_host_is_a_network_error() {
        let transport = BlockingHttpTransport::new(&ClientConfig::new("http://127.0.0.1:9"))
            .expect("transport should build");
        let err = transport
            .get("nearest/v1/driving/0,0")
            .expect_err("connection should be refused");
        assert!(
            matches!(&err, TransportError::Network { .. }),
            "expected Network error, got {err:?}"
        );
    }

    #[tokio::test]
    async fn drops_inside_an_async_context() {
        let transport = BlockingHttpTransport::new(&ClientConfig::new("http://127.0.0.1:9"))
            .expect("transport should build");
        assert_eq!(transport.base_url(), "http://127.0.0.1:9");
        drop(transport);
    }
}

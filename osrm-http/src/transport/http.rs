use std::time::Duration;

use async_trait::async_trait;
use osrm_core::url::join_url;
use osrm_core::{AsyncTransport, RawResponse, TransportError};
use reqwest::Client;
use reqwest::redirect::Policy;

use crate::config::ClientConfig;
use crate::error::ClientBuildError;

/// Asynchronous transport backed by a [`reqwest::Client`].
///
/// The client owns a connection pool for the lifetime of the transport.
/// Redirects are not followed, so a 3xx reaches the caller as a status
/// code. Dropping an in-flight future aborts the request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError::HttpClient`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .redirect(Policy::none())
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Perform one `GET` and collect the status and body.
    pub(crate) async fn fetch(&self, path: &str) -> Result<RawResponse, TransportError> {
        let url = join_url(&self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }

    /// Convert a reqwest error to a `TransportError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.timeout.as_secs(),
            };
        }

        TransportError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl AsyncTransport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.fetch(path).await
    }
}

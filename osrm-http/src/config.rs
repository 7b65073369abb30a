//! Client configuration.

use std::time::Duration;

use osrm_core::{DEFAULT_API_VERSION, DEFAULT_PROFILE, Settings};

/// Public OSRM demo server.
pub const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org";

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "osrm-client/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::OsrmClient`] and [`crate::OsrmAsyncClient`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use osrm_http::ClientConfig;
///
/// let config = ClientConfig::new("http://localhost:5000")
///     .with_default_profile("foot")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.settings().default_profile(), "foot");
/// assert_eq!(config.api_version, "v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// API version path segment.
    pub api_version: String,
    /// Profile used when a request does not name one.
    pub default_profile: String,
    /// Request timeout, applied to connecting and to the whole exchange.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            default_profile: DEFAULT_PROFILE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the API version path segment.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the profile used when a request does not name one.
    #[must_use]
    pub fn with_default_profile(mut self, default_profile: impl Into<String>) -> Self {
        self.default_profile = default_profile.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Path settings derived from this configuration.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::new(self.api_version.as_str(), self.default_profile.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_target_public_server() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://router.project-osrm.org");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.settings(), Settings::default());
    }

    #[rstest]
    fn builders_override_each_field() {
        let config = ClientConfig::new("http://localhost:5000")
            .with_api_version("v2")
            .with_default_profile("bike")
            .with_timeout(Duration::from_millis(250))
            .with_user_agent("tests/1.0");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.settings(), Settings::new("v2", "bike"));
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.user_agent, "tests/1.0");
    }
}

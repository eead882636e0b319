//! Client configuration.

use std::time::Duration;

use crate::error::ClientError;

/// Production base URL of the check API.
pub const BASE_URL: &str = "https://api.adresslabor.de";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "ADRESSLABOR_BASE_URL";

/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECONDS: &str = "ADRESSLABOR_TIMEOUT_SECONDS";

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the check API (default: `<https://api.adresslabor.de>`).
    pub base_url: String,
    /// Request timeout. `None` (the default) waits indefinitely.
    pub timeout: Option<Duration>,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!("adresslabor-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Load options from `ADRESSLABOR_BASE_URL` and
    /// `ADRESSLABOR_TIMEOUT_SECONDS`, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the timeout is not a whole
    /// number of seconds.
    pub fn from_env() -> Result<Self, ClientError> {
        let mut options = Self::default();

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.is_empty() {
                options.base_url = base_url;
            }
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECONDS) {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Configuration(format!("{ENV_TIMEOUT_SECONDS} must be whole seconds, got {raw:?}"))
            })?;
            options.timeout = Some(Duration::from_secs(seconds));
        }

        Ok(options)
    }

    /// Use a different base URL, e.g. a staging host or a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bound every request by a timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_without_timeout() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url, "https://api.adresslabor.de");
        assert!(options.timeout.is_none());
        assert!(options.user_agent.starts_with("adresslabor-client/"));
    }

    #[test]
    fn builder_methods() {
        let options = ClientOptions::default()
            .with_base_url("http://localhost:9000")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(options.base_url, "http://localhost:9000");
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    }
}

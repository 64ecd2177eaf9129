//! Client configuration.
//!
//! Base URL and the uniform request timeout are fixed at construction time,
//! either explicitly via the builder or from the environment at startup.
//! They are not runtime-negotiable.

use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.velo.app";

/// Default call/read/write timeout applied to every API request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "VELO_API_URL";

/// Environment variable overriding the request timeout (seconds).
pub const ENV_API_TIMEOUT_SECS: &str = "VELO_API_TIMEOUT_SECS";

/// Configuration for the API client.
///
/// # Example
///
/// ```ignore
/// use velo::config::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://staging.velo.app")
///     .with_timeout(std::time::Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Uniform timeout for every request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a config from the environment.
    ///
    /// Reads `VELO_API_URL` and `VELO_API_TIMEOUT_SECS`; unset or unparsable
    /// values fall back to the compiled-in defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url);
            }
        }
        if let Some(secs) = std::env::var(ENV_API_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://staging.velo.app")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "https://staging.velo.app");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new().with_base_url("https://api.velo.app/");
        assert_eq!(config.base_url, "https://api.velo.app");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var(ENV_API_URL, "https://env.velo.app/");
        std::env::set_var(ENV_API_TIMEOUT_SECS, "7");
        let config = ClientConfig::from_env();
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_API_TIMEOUT_SECS);

        assert_eq!(config.base_url, "https://env.velo.app");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_and_unparsable_values() {
        std::env::set_var(ENV_API_URL, "   ");
        std::env::set_var(ENV_API_TIMEOUT_SECS, "soon");
        let config = ClientConfig::from_env();
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_API_TIMEOUT_SECS);

        assert_eq!(config, ClientConfig::default());
    }
}

//! Configuration for the Medium publisher.
//!
//! Configuration is built once at startup and handed to [`MediumClient`](crate::MediumClient).
//! Values come from the process environment, optionally seeded from a `.env` file in
//! the current directory.
//!
//! ## Environment Variables
//!
//! | Variable                 | Meaning                                 | Default                     |
//! |--------------------------|-----------------------------------------|-----------------------------|
//! | `MEDIUM_TOKEN`           | Integration token (required)            |                             |
//! | `MEDIUM_BASE_URL`        | API root                                | `https://api.medium.com/v1` |
//! | `MEDIUM_CONNECT_TIMEOUT` | Connect timeout in seconds              | `10`                        |
//! | `MEDIUM_REQUEST_TIMEOUT` | Whole-request timeout in seconds        | none                        |
//!
//! ## Usage
//!
//! ```rust
//! use medium_pub_rs::config::{Config, HttpConfig};
//!
//! let config = Config::builder()
//!     .token("my-integration-token")
//!     .http(HttpConfig::builder().request_timeout_secs(60).build())
//!     .build();
//! assert!(config.validate().is_ok());
//! ```

use crate::auth::IntegrationToken;
use crate::error::{MediumError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const TOKEN_VAR: &str = "MEDIUM_TOKEN";
pub const BASE_URL_VAR: &str = "MEDIUM_BASE_URL";
pub const CONNECT_TIMEOUT_VAR: &str = "MEDIUM_CONNECT_TIMEOUT";
pub const REQUEST_TIMEOUT_VAR: &str = "MEDIUM_REQUEST_TIMEOUT";

const ENV_FILE: &str = ".env";

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Medium integration token
    pub token: Option<IntegrationToken>,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL for the Medium API (default: "https://api.medium.com/v1")
    pub base_url: String,
    /// User agent string for requests
    pub user_agent: String,
    /// Connection timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
    /// Request timeout in seconds (default: none)
    pub request_timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.medium.com/v1".to_string(),
            user_agent: format!("medium-pub-rs/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}

/// Loads variables from a `.env` file in the current directory.
///
/// Parent directories are not searched. Variables already present in the process
/// environment win. Returns the path of the file that was loaded, if any.
pub fn load_env_file() -> Option<PathBuf> {
    let path = PathBuf::from(ENV_FILE);
    match dotenvy::from_path(&path) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable {ENV_FILE} file: {e}");
            None
        }
    }
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(TOKEN_VAR) {
            config.token = Some(IntegrationToken::new(val));
        }

        if let Some(val) = lookup(BASE_URL_VAR) {
            config.http.base_url = val;
        }

        if let Some(val) = lookup(CONNECT_TIMEOUT_VAR) {
            config.http.connect_timeout_secs = val.trim().parse().map_err(|_| {
                MediumError::config_error(format!("Invalid {CONNECT_TIMEOUT_VAR} value"))
            })?;
        }

        if let Some(val) = lookup(REQUEST_TIMEOUT_VAR) {
            config.http.request_timeout_secs = Some(val.trim().parse().map_err(|_| {
                MediumError::config_error(format!("Invalid {REQUEST_TIMEOUT_VAR} value"))
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for consistency and constraints.
    pub fn validate(&self) -> Result<()> {
        match &self.token {
            Some(token) if !token.is_blank() => {}
            _ => return Err(MediumError::MissingToken),
        }

        if self.http.base_url.is_empty() {
            return Err(MediumError::config_error("base_url cannot be empty"));
        }
        url::Url::parse(&self.http.base_url)?;

        if self.http.connect_timeout_secs == 0 {
            return Err(MediumError::config_error(
                "connect_timeout_secs must be greater than 0",
            ));
        }

        if self.http.request_timeout_secs == Some(0) {
            return Err(MediumError::config_error(
                "request_timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Converts the connect timeout to a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http.connect_timeout_secs)
    }

    /// Converts the request timeout to a Duration, if one is set.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.http.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Builder for creating Config instances.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    token: Option<IntegrationToken>,
    http: Option<HttpConfig>,
}

impl ConfigBuilder {
    /// Sets the integration token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(IntegrationToken::new(token));
        self
    }

    /// Sets the HTTP configuration.
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            token: self.token,
            http: self.http.unwrap_or_default(),
        }
    }
}

impl HttpConfig {
    /// Creates a new HTTP config builder.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// Builder for HttpConfig.
#[derive(Debug, Default)]
pub struct HttpConfigBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
}

impl HttpConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn connect_timeout_secs(mut self, timeout: u64) -> Self {
        self.connect_timeout_secs = Some(timeout);
        self
    }

    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.request_timeout_secs = Some(timeout);
        self
    }

    pub fn build(self) -> HttpConfig {
        let default = HttpConfig::default();
        HttpConfig {
            base_url: self.base_url.unwrap_or(default.base_url),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
            connect_timeout_secs: self
                .connect_timeout_secs
                .unwrap_or(default.connect_timeout_secs),
            request_timeout_secs: self.request_timeout_secs.or(default.request_timeout_secs),
        }
    }
}

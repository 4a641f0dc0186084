//! Client configuration settings
//!
//! Defines configuration structures and environment loading logic

use crate::models::Credentials;
use crate::utils::error::{helpers::validation_error, AndromedaResult};
use crate::utils::logging::redact;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Main client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP client configuration
    pub client: ClientConfig,
    /// Default provider coordinates
    pub provider: ProviderConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout in seconds
    pub timeout: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

/// Default provider coordinates, used when the caller does not supply its own
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider base URL
    pub host: Option<String>,
    /// API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Acting username
    pub user_name: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("api_key", &self.api_key.as_deref().map(redact))
            .field("user_name", &self.user_name)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            provider: ProviderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load configuration from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let settings = Self {
            client: ClientConfig {
                timeout: get_env_or_default("ANDROMEDA_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()
                    .context("Invalid timeout value")?,
                user_agent: std::env::var("ANDROMEDA_USER_AGENT")
                    .unwrap_or_else(|_| default_user_agent()),
            },
            provider: ProviderConfig {
                host: get_env_non_empty("ANDROMEDA_HOST"),
                api_key: get_env_non_empty("ANDROMEDA_API_KEY"),
                user_name: get_env_non_empty("ANDROMEDA_USER_NAME"),
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.client.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        if self.client.user_agent.trim().is_empty() {
            anyhow::bail!("User agent cannot be empty");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout)
    }

    /// Credentials assembled from the configured host and API key
    pub fn credentials(&self) -> AndromedaResult<Credentials> {
        let host = self
            .provider
            .host
            .clone()
            .ok_or_else(|| validation_error("host", "ANDROMEDA_HOST is not set"))?;
        let api_key = self
            .provider
            .api_key
            .clone()
            .ok_or_else(|| validation_error("apiKey", "ANDROMEDA_API_KEY is not set"))?;

        Ok(Credentials::new(api_key, host))
    }
}

fn default_user_agent() -> String {
    format!("andromeda-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_api_key() {
        let mut settings = Settings::default();
        settings.provider.api_key = Some("super-secret-key".to_string());
        settings.provider.host = Some("https://andromeda.example.com".to_string());

        let printed = format!("{:?}", settings);
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("su***"));
        assert!(printed.contains("andromeda.example.com"));
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.client.timeout, 5);
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert!(settings.client.user_agent.starts_with("andromeda-client/"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.client.timeout = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_logging() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.logging.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_credentials_require_host_and_key() {
        let mut settings = Settings::default();
        assert!(settings.credentials().is_err());

        settings.provider.host = Some("https://andromeda.example.com".to_string());
        assert!(settings.credentials().is_err());

        settings.provider.api_key = Some("secret".to_string());
        let credentials = settings.credentials().unwrap();
        assert_eq!(credentials.host, "https://andromeda.example.com");
        assert_eq!(credentials.api_key, "secret");
    }
}

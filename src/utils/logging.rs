//! Logging utilities
//!
//! Subscriber initialization and secret redaction for log output

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_new(&config.level)?;

    if config.format == "json" {
        // JSON format logs (production environment)
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init()
    }
}

/// Mask a secret, keeping at most the first two characters
pub fn redact(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(2).collect();
    format!("{}***", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        assert_eq!(redact(""), "***");
        assert_eq!(redact("abcd"), "***");
        assert_eq!(redact("abcdefgh"), "ab***");
        assert_eq!(redact("ключ-доступа"), "кл***");
    }

    #[test]
    fn test_init_logging_rejects_bad_filter() {
        let config = LoggingConfig {
            level: "andromeda=bogus".to_string(),
            format: "text".to_string(),
        };
        assert!(init_logging(&config).is_err());
    }
}

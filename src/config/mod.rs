//! Configuration management module
//!
//! Loads client settings from environment variables and `.env` files

pub mod settings;

pub use settings::{ClientConfig, LoggingConfig, ProviderConfig, Settings, DEFAULT_TIMEOUT_SECS};

//! Andromeda API Client Library
//!
//! Typed async client for the Andromeda alarm-monitoring REST API:
//! sites, responsible persons, panic-button checks, MyAlarm users,
//! partitions and zones.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{Credentials, RequestContext};
pub use services::{AndromedaClient, Operation, Transport};
pub use utils::error::{AndromedaError, AndromedaResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}

//! Input validation
//!
//! Rejects malformed call parameters before any request is built.

use super::endpoints::Operation;
use crate::models::{Credentials, MyAlarmRole};
use crate::utils::error::{helpers::validation_error, AndromedaResult};
use reqwest::Url;

/// Lower bound (exclusive) of the panic check interval, seconds
pub const CHECK_INTERVAL_MIN: u32 = 30;
/// Upper bound (exclusive) of the panic check interval, seconds
pub const CHECK_INTERVAL_MAX: u32 = 180;

const PHONE_PREFIX: &str = "+7";
const PHONE_LEN: usize = 12;

/// Validate an operation input: endpoint fields first, then credentials
pub fn validate<O: Operation>(input: &O) -> AndromedaResult<()> {
    input.validate()?;
    validate_credentials(input.credentials())
}

pub fn validate_credentials(credentials: &Credentials) -> AndromedaResult<()> {
    require_non_empty("apiKey", &credentials.api_key)?;
    validate_host(&credentials.host)
}

/// Host must be an absolute http(s) URL
pub fn validate_host(host: &str) -> AndromedaResult<()> {
    require_non_empty("host", host)?;

    let url = Url::parse(host)
        .map_err(|e| validation_error("host", format!("'{}' is not a valid URL: {}", host, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(validation_error(
            "host",
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        ));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(validation_error("host", "URL has no host name"));
    }

    // Endpoint paths are appended to the host verbatim
    if url.query().is_some() || url.fragment().is_some() {
        return Err(validation_error("host", "URL must not carry a query or fragment"));
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err(validation_error("host", "URL must not carry credentials"));
    }

    Ok(())
}

pub fn require_non_empty(field: &'static str, value: &str) -> AndromedaResult<()> {
    if value.is_empty() {
        return Err(validation_error(field, "must not be empty"));
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: i64) -> AndromedaResult<()> {
    if value < 1 {
        return Err(validation_error(field, format!("must be at least 1, got {}", value)));
    }
    Ok(())
}

/// Zero means provider default; anything else must lie strictly inside (30, 180)
pub fn validate_check_interval(seconds: u32) -> AndromedaResult<()> {
    if seconds != 0 && (seconds <= CHECK_INTERVAL_MIN || seconds >= CHECK_INTERVAL_MAX) {
        return Err(validation_error(
            "checkInterval",
            format!(
                "must be between {} and {} seconds exclusive, got {}",
                CHECK_INTERVAL_MIN, CHECK_INTERVAL_MAX, seconds
            ),
        ));
    }
    Ok(())
}

pub fn validate_role(role: &str) -> AndromedaResult<MyAlarmRole> {
    role.parse().map_err(|e: String| validation_error("role", e))
}

/// `+7` followed by ten more characters
pub fn validate_phone(phone: &str) -> AndromedaResult<()> {
    require_non_empty("phone", phone)?;

    if phone.chars().count() != PHONE_LEN || !phone.starts_with(PHONE_PREFIX) {
        return Err(validation_error(
            "phone",
            format!("expected {} characters starting with '{}'", PHONE_LEN, PHONE_PREFIX),
        ));
    }
    Ok(())
}

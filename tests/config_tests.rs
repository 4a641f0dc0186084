//! Configuration loading tests

use andromeda_client::config::Settings;
use andromeda_client::AndromedaClient;
use std::env;
use std::time::Duration;

const VARS: [&str; 7] = [
    "ANDROMEDA_TIMEOUT_SECS",
    "ANDROMEDA_USER_AGENT",
    "ANDROMEDA_HOST",
    "ANDROMEDA_API_KEY",
    "ANDROMEDA_USER_NAME",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

// Environment variables are process-wide, so every env scenario lives in one test.
#[test]
fn test_settings_from_env() {
    clear_env();

    let settings = Settings::from_env().expect("defaults should load");
    assert_eq!(settings.client.timeout, 5);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");
    assert!(settings.provider.host.is_none());
    assert!(settings.credentials().is_err());

    env::set_var("ANDROMEDA_TIMEOUT_SECS", "9");
    env::set_var("ANDROMEDA_USER_AGENT", "monitoring-bridge/2.1");
    env::set_var("ANDROMEDA_HOST", "https://andromeda.example.com/api");
    env::set_var("ANDROMEDA_API_KEY", "key-from-env");
    env::set_var("ANDROMEDA_USER_NAME", "");
    env::set_var("LOG_FORMAT", "json");

    let settings = Settings::from_env().expect("configured env should load");
    assert_eq!(settings.timeout(), Duration::from_secs(9));
    assert_eq!(settings.client.user_agent, "monitoring-bridge/2.1");
    assert_eq!(settings.logging.format, "json");
    assert_eq!(settings.provider.user_name, None);

    let credentials = settings.credentials().unwrap();
    assert_eq!(credentials.host, "https://andromeda.example.com/api");
    assert_eq!(credentials.api_key, "key-from-env");

    let client = AndromedaClient::from_settings(&settings).unwrap();
    assert_eq!(client.timeout(), Duration::from_secs(9));

    env::set_var("ANDROMEDA_TIMEOUT_SECS", "soon");
    assert!(Settings::from_env().is_err());

    env::set_var("ANDROMEDA_TIMEOUT_SECS", "0");
    assert!(Settings::from_env().is_err());

    env::set_var("ANDROMEDA_TIMEOUT_SECS", "5");
    env::set_var("LOG_FORMAT", "yaml");
    assert!(Settings::from_env().is_err());

    clear_env();
}

#[test]
fn test_settings_serialization_skips_api_key() {
    let mut settings = Settings::default();
    settings.provider.api_key = Some("do-not-print".to_string());
    settings.provider.host = Some("https://andromeda.example.com".to_string());

    let json = serde_json::to_string(&settings).unwrap();
    assert!(!json.contains("do-not-print"));
    assert!(json.contains("andromeda.example.com"));
}

//! Andromeda probe
//!
//! Looks up one site using credentials from the environment and prints it as JSON

use andromeda_client::models::GetSitesInput;
use andromeda_client::utils::logging::init_logging;
use andromeda_client::{AndromedaClient, RequestContext, Settings};
use anyhow::{Context, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env().context("Failed to load client settings")?;

    init_logging(&settings.logging).map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let site_id = std::env::args()
        .nth(1)
        .context("Usage: andromeda-probe <site-id>")?;

    let credentials = settings.credentials()?;
    let mut input = GetSitesInput::new(credentials, site_id);
    if let Some(user_name) = &settings.provider.user_name {
        input = input.with_user_name(user_name.clone());
    }

    let client = AndromedaClient::from_settings(&settings)?;
    info!("{} querying site {}", andromeda_client::version_info(), input.id);

    let site = client
        .get_sites(&RequestContext::new(), &input)
        .await
        .context("Site lookup failed")?;

    println!("{}", serde_json::to_string_pretty(&site)?);

    Ok(())
}

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use auth::{AuthConfig, AuthService};
use common::store::open_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting mock authentication backend");

    let config = AuthConfig::from_env()?;
    let store = open_store(&config.store)?;

    if !store.health_check()? {
        error!("Key-value store is not reachable");
        anyhow::bail!("Failed to reach key-value store");
    }

    let service = AuthService::from_config(store.clone(), &config);
    if service.initialize().await? {
        info!("Seeded demo account for a fresh store");
    }

    match service.current_user()? {
        Some(user) => info!("Active session for user: {} ({})", user.username, user.id),
        None => info!("No active session"),
    }

    info!(
        "Mock authentication backend ready with {} stored keys",
        store.keys()?.len()
    );

    Ok(())
}

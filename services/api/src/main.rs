use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{DashboardConfig, DashboardRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting dashboard data service");

    let config = DashboardConfig::from_env()?;
    let repository = DashboardRepository::new(config.data_dir.clone(), config.latency);
    info!("Reading dashboard data from {}", repository.data_dir().display());

    let snapshot = repository.snapshot().await?;
    info!(
        "Loaded {} exchange rates, {} alerts ({} unread), {} services",
        snapshot.market.exchange_rates.len(),
        snapshot.alerts.alerts.len(),
        snapshot.alerts.unread().len(),
        snapshot.system.services.len()
    );

    // The snapshot is what the dashboard renders
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

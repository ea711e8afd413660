//! Dashboard repository reading static JSON documents

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use common::Latency;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{AccountOverview, Alert, AlertFeed, DashboardSnapshot, MarketData, SystemStatus},
};

pub const MARKET_DATA_FILE: &str = "market_data.json";
pub const ALERTS_FILE: &str = "alerts.json";
pub const ACCOUNT_FILE: &str = "account.json";
pub const SYSTEM_STATUS_FILE: &str = "system_status.json";

/// Dashboard repository for static file operations
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    data_dir: PathBuf,
    latency: Latency,
}

impl DashboardRepository {
    /// Create a new dashboard repository
    pub fn new(data_dir: impl Into<PathBuf>, latency: Latency) -> Self {
        Self {
            data_dir: data_dir.into(),
            latency,
        }
    }

    /// Directory the documents are read from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read and decode one document; a missing file yields the default payload
    async fn load<T: DeserializeOwned + Default>(&self, file_name: &str) -> ApiResult<T> {
        self.latency.simulate().await;

        let path = self.data_dir.join(file_name);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} not found, using defaults", path.display());
                return Ok(T::default());
            }
            Err(source) => return Err(ApiError::Io { path, source }),
        };

        info!("Loaded {}", path.display());
        serde_json::from_str(&contents).map_err(|source| ApiError::Parse { path, source })
    }

    /// Exchange and interest rates
    pub async fn market_data(&self) -> ApiResult<MarketData> {
        self.load(MARKET_DATA_FILE).await
    }

    /// Full alert feed
    pub async fn alerts(&self) -> ApiResult<AlertFeed> {
        self.load(ALERTS_FILE).await
    }

    /// Alerts not yet read
    pub async fn unread_alerts(&self) -> ApiResult<Vec<Alert>> {
        let feed = self.alerts().await?;
        Ok(feed.unread().into_iter().cloned().collect())
    }

    /// Account totals
    pub async fn account_overview(&self) -> ApiResult<AccountOverview> {
        self.load(ACCOUNT_FILE).await
    }

    /// Platform status
    pub async fn system_status(&self) -> ApiResult<SystemStatus> {
        self.load(SYSTEM_STATUS_FILE).await
    }

    /// Every payload at once
    pub async fn snapshot(&self) -> ApiResult<DashboardSnapshot> {
        let (market, alerts, account, system) = tokio::try_join!(
            self.market_data(),
            self.alerts(),
            self.account_overview(),
            self.system_status(),
        )?;

        Ok(DashboardSnapshot {
            market,
            alerts,
            account,
            system,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertLevel;

    #[tokio::test]
    async fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DashboardRepository::new(dir.path().join("absent"), Latency::none());

        assert_eq!(repo.snapshot().await.unwrap(), DashboardSnapshot::default());
    }

    #[tokio::test]
    async fn test_malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ACCOUNT_FILE), "{\"total_assets\": ").unwrap();
        let repo = DashboardRepository::new(dir.path(), Latency::none());

        assert!(matches!(
            repo.account_overview().await,
            Err(ApiError::Parse { .. })
        ));
        assert!(repo.snapshot().await.is_err());
    }

    #[tokio::test]
    async fn test_unread_alerts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ALERTS_FILE),
            r#"{"alerts": [
                {"id": 1, "level": "warning", "title": "Volatility", "read": false},
                {"id": 2, "title": "Statement ready", "read": true}
            ]}"#,
        )
        .unwrap();
        let repo = DashboardRepository::new(dir.path(), Latency::none());

        let unread = repo.unread_alerts().await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].level, AlertLevel::Warning);
    }
}

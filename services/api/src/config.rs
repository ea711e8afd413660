//! Configuration of the dashboard data service

use std::path::PathBuf;

use common::{Latency, StoreError, settings::load_settings};

use crate::error::ApiResult;

/// Dashboard data configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Directory holding the JSON documents
    pub data_dir: PathBuf,
    /// Artificial delay before every read
    pub latency: Latency,
}

impl DashboardConfig {
    /// Create a new DashboardConfig from environment variables
    ///
    /// # Environment Variables
    /// - `MOCK_BACKEND_DASHBOARD_DATA_DIR`: data directory (default: `data`)
    /// - `MOCK_BACKEND_LATENCY_MIN_MS` / `MOCK_BACKEND_LATENCY_MAX_MS`: simulated latency
    pub fn from_env() -> ApiResult<Self> {
        let settings = load_settings()?;

        Ok(Self {
            data_dir: PathBuf::from(
                settings
                    .get_string("dashboard_data_dir")
                    .map_err(StoreError::from)?,
            ),
            latency: Latency::from_settings(&settings)?,
        })
    }
}

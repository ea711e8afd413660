//! Environment-driven settings shared by the mock backend services
//!
//! All services read the same `MOCK_BACKEND_*` environment variables through
//! the `config` crate, so defaults live in one place.

use config::{Config, Environment};

use crate::error::{StoreError, StoreResult};

/// Prefix of every environment variable read by [`load_settings`]
pub const ENV_PREFIX: &str = "MOCK_BACKEND";

/// Load the settings layer from the environment
///
/// # Environment Variables
/// - `MOCK_BACKEND_STORE`: `memory`, `file` or `redis` (default: `file`)
/// - `MOCK_BACKEND_DATA_FILE`: file used by the file store (default: `mock_storage.json`)
/// - `MOCK_BACKEND_REDIS_URL`: Redis connection URL (default: `redis://localhost:6379`)
/// - `MOCK_BACKEND_REDIS_PREFIX`: key namespace inside Redis (default: `mock_backend:`)
/// - `MOCK_BACKEND_LATENCY_MIN_MS`: lower bound of the simulated latency (default: 200)
/// - `MOCK_BACKEND_LATENCY_MAX_MS`: upper bound of the simulated latency (default: 500)
/// - `MOCK_BACKEND_TOKEN_EXPIRY`: token lifetime in seconds (default: 86400)
/// - `MOCK_BACKEND_DASHBOARD_DATA_DIR`: directory of the dashboard JSON files (default: `data`)
pub fn load_settings() -> StoreResult<Config> {
    let settings = Config::builder()
        .set_default("store", "file")?
        .set_default("data_file", "mock_storage.json")?
        .set_default("redis_url", "redis://localhost:6379")?
        .set_default("redis_prefix", "mock_backend:")?
        .set_default("latency_min_ms", 200)?
        .set_default("latency_max_ms", 500)?
        .set_default("token_expiry", 86_400)?
        .set_default("dashboard_data_dir", "data")?
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;

    Ok(settings)
}

/// Read an integer setting that must not be negative
pub fn get_u64(settings: &Config, key: &str) -> StoreResult<u64> {
    let value = settings.get_int(key)?;
    u64::try_from(value).map_err(|_| {
        StoreError::Configuration(format!("{} must not be negative, got {}", key, value))
    })
}

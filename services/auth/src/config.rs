//! Configuration of the mock authentication service

use common::{Latency, settings::load_settings, store::StoreConfig};

use crate::{error::AuthResult, token::TokenConfig};

/// Service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Which key-value backend holds the data
    pub store: StoreConfig,
    /// Token lifetime
    pub token: TokenConfig,
    /// Artificial delay before every operation
    pub latency: Latency,
}

impl AuthConfig {
    /// Create a new AuthConfig from `MOCK_BACKEND_*` environment variables
    pub fn from_env() -> AuthResult<Self> {
        let settings = load_settings()?;

        Ok(Self {
            store: StoreConfig::from_settings(&settings)?,
            token: TokenConfig::from_settings(&settings)?,
            latency: Latency::from_settings(&settings)?,
        })
    }
}

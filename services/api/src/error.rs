//! Custom error types for the dashboard data service

use std::path::PathBuf;

use common::error::StoreError;
use thiserror::Error;

/// Custom error type for the dashboard data service
#[derive(Error, Debug)]
pub enum ApiError {
    /// A data file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its payload
    #[error("Malformed data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] StoreError),
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

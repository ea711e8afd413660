//! Custom error types for the common library
//!
//! This module defines the errors raised by the key-value store backends
//! and their configuration.

use thiserror::Error;

/// Custom error type for key-value store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred while reading or writing the backing file
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded
    #[error("Store serialization error for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error returned by the Redis backend
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// The in-process store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,

    /// Configuration error
    #[error("Store configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for StoreError {
    fn from(err: config::ConfigError) -> Self {
        StoreError::Configuration(err.to_string())
    }
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

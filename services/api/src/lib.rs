//! Dashboard data for the investment dashboard mock backend
//!
//! The dashboard widgets (market data, alerts, account overview, system
//! status) read static JSON documents. This crate gives those documents
//! typed shapes with defaults for every field and serves them after the same
//! simulated latency as the authentication mock.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::DashboardConfig;
pub use error::{ApiError, ApiResult};
pub use repositories::DashboardRepository;

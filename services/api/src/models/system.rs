//! System status models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health of the platform or one of its services
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Operational,
    Degraded,
    Down,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Status of one backend service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStatus {
    pub name: String,
    pub status: ServiceHealth,
}

/// Payload of `system_status.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    pub status: ServiceHealth,
    pub api_latency_ms: f64,
    pub uptime_percent: f64,
    pub last_updated: Option<DateTime<Utc>>,
    pub services: Vec<ServiceStatus>,
}

impl SystemStatus {
    /// Services that are not fully operational
    pub fn degraded_services(&self) -> impl Iterator<Item = &ServiceStatus> {
        self.services
            .iter()
            .filter(|service| service.status != ServiceHealth::Operational)
    }
}

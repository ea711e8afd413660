//! Alert models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an alert
///
/// Levels the dashboard does not know are shown as `Info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Critical,
    #[default]
    #[serde(other)]
    Info,
}

/// One dashboard alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub id: u64,
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    /// Stock the alert is about, if any
    pub stock_code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub read: bool,
}

/// Payload of `alerts.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertFeed {
    pub alerts: Vec<Alert>,
}

impl AlertFeed {
    /// Alerts not yet marked as read, in feed order
    pub fn unread(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|alert| !alert.read).collect()
    }
}

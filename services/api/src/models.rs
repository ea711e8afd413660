//! Dashboard payloads read from static JSON documents
//!
//! Every field has a default, so a partial or empty document still renders.

use serde::{Deserialize, Serialize};

pub mod account;
pub mod alert;
pub mod market;
pub mod system;

pub use account::AccountOverview;
pub use alert::{Alert, AlertFeed, AlertLevel};
pub use market::{ExchangeRate, InterestRates, MarketData};
pub use system::{ServiceHealth, ServiceStatus, SystemStatus};

/// All dashboard payloads gathered in one value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub market: MarketData,
    pub alerts: AlertFeed,
    pub account: AccountOverview,
    pub system: SystemStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_documents_fill_defaults() {
        let market: MarketData =
            serde_json::from_str(r#"{"exchange_rates": [{"currency": "USD/KRW", "rate": 1380.5}]}"#)
                .unwrap();
        assert_eq!(market.exchange_rates.len(), 1);
        assert_eq!(market.exchange_rates[0].change, 0.0);
        assert_eq!(market.interest_rates, InterestRates::default());
        assert!(market.rate_for("usd/krw").is_some());

        let account: AccountOverview = serde_json::from_str("{}").unwrap();
        assert_eq!(account, AccountOverview::default());
    }

    #[test]
    fn test_alert_levels_and_unread() {
        let feed: AlertFeed = serde_json::from_str(
            r#"{"alerts": [
                {"id": 1, "level": "critical", "title": "Margin call", "read": false},
                {"id": 2, "title": "Dividend paid", "read": true},
                {"id": 3, "level": "warning", "title": "Price drop", "stock_code": "005930"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(feed.alerts[0].level, AlertLevel::Critical);
        assert_eq!(feed.alerts[1].level, AlertLevel::Info);
        let unread: Vec<u64> = feed.unread().iter().map(|alert| alert.id).collect();
        assert_eq!(unread, vec![1, 3]);
    }

    #[test]
    fn test_unknown_alert_level_falls_back_to_info() {
        let feed: AlertFeed = serde_json::from_str(
            r#"{"alerts": [
                {"id": 1, "level": "urgent", "title": "Margin call"},
                {"id": 2, "level": "critical", "title": "Order rejected"},
                {"id": 3, "level": "info", "title": "Dividend paid"}
            ]}"#,
        )
        .unwrap();

        let levels: Vec<AlertLevel> = feed.alerts.iter().map(|alert| alert.level).collect();
        assert_eq!(
            levels,
            vec![AlertLevel::Info, AlertLevel::Critical, AlertLevel::Info]
        );
        assert_eq!(feed.alerts[0].title, "Margin call");
    }

    #[test]
    fn test_unknown_service_health() {
        let status: SystemStatus = serde_json::from_str(
            r#"{"status": "maintenance", "services": [
                {"name": "quotes", "status": "operational"},
                {"name": "orders", "status": "degraded"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(status.status, ServiceHealth::Unknown);
        let degraded: Vec<&str> = status
            .degraded_services()
            .map(|service| service.name.as_str())
            .collect();
        assert_eq!(degraded, vec!["orders"]);
    }
}

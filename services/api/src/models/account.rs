//! Account overview model

use serde::{Deserialize, Serialize};

/// Payload of `account.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountOverview {
    pub total_assets: f64,
    pub cash_balance: f64,
    pub invested_amount: f64,
    pub total_profit_loss: f64,
    pub profit_loss_percent: f64,
    pub daily_change: f64,
    pub holdings_count: u32,
}

//! Market data models for the dashboard widgets

use serde::{Deserialize, Serialize};

/// One currency quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRate {
    /// Quote pair, e.g. `USD/KRW`
    pub currency: String,
    pub rate: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// Reference interest rates in percent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestRates {
    pub base_rate: f64,
    pub treasury_3y: f64,
    pub treasury_10y: f64,
    pub corporate_aa: f64,
}

/// Payload of `market_data.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketData {
    pub exchange_rates: Vec<ExchangeRate>,
    pub interest_rates: InterestRates,
}

impl MarketData {
    /// Quote for a currency pair, if present
    pub fn rate_for(&self, currency: &str) -> Option<&ExchangeRate> {
        self.exchange_rates
            .iter()
            .find(|rate| rate.currency.eq_ignore_ascii_case(currency))
    }
}

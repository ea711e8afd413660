//! Watchlist model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked stock in a user's watchlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: u64,
    pub stock_code: String,
    pub stock_name: String,
    #[serde(default)]
    pub notes: String,
    pub added_at: DateTime<Utc>,
}

/// Payload for adding a stock to the watchlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWatchlistEntry {
    pub stock_code: String,
    pub stock_name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewWatchlistEntry {
    pub fn new(stock_code: impl Into<String>, stock_name: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
            stock_name: stock_name.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

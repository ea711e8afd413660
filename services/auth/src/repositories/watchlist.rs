//! Watchlist repository for key-value store operations

use std::sync::Arc;

use chrono::Utc;
use common::store::{JsonStoreExt, KeyValueStore};
use tracing::info;

use crate::{
    error::{AuthError, AuthResult},
    models::{NewWatchlistEntry, WatchlistEntry},
};

/// Key holding a user's watchlist
pub fn watchlist_key(user_id: u64) -> String {
    format!("user_watchlist_{}", user_id)
}

/// Key holding the next watchlist id of a user
pub fn watchlist_counter_key(user_id: u64) -> String {
    format!("user_watchlist_{}_next_id", user_id)
}

/// Watchlist repository
#[derive(Clone)]
pub struct WatchlistRepository {
    store: Arc<dyn KeyValueStore>,
}

impl WatchlistRepository {
    /// Create a new watchlist repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Entries of a user in insertion order
    pub fn list(&self, user_id: u64) -> AuthResult<Vec<WatchlistEntry>> {
        Ok(self
            .store
            .get_json(&watchlist_key(user_id))?
            .unwrap_or_default())
    }

    /// Whether the user already tracks `stock_code`
    pub fn contains(&self, user_id: u64, stock_code: &str) -> AuthResult<bool> {
        Ok(self
            .list(user_id)?
            .iter()
            .any(|entry| entry.stock_code == stock_code))
    }

    /// Next id from the per-user counter
    ///
    /// Never below one past the highest id in the list, so lists written
    /// without a counter keep getting fresh ids.
    fn next_id(&self, user_id: u64, entries: &[WatchlistEntry]) -> AuthResult<u64> {
        let floor = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let stored: Option<u64> = self.store.get_json(&watchlist_counter_key(user_id))?;
        Ok(stored.map_or(floor, |next| next.max(floor)))
    }

    /// Append a stock to the user's watchlist
    ///
    /// `new_entry.stock_code` is expected to be validated and trimmed already.
    pub fn add(&self, user_id: u64, new_entry: &NewWatchlistEntry) -> AuthResult<WatchlistEntry> {
        info!(
            "Adding {} to watchlist of user: {}",
            new_entry.stock_code, user_id
        );

        let mut entries = self.list(user_id)?;
        if entries
            .iter()
            .any(|entry| entry.stock_code == new_entry.stock_code)
        {
            return Err(AuthError::DuplicateStock);
        }

        let id = self.next_id(user_id, &entries)?;
        let entry = WatchlistEntry {
            id,
            stock_code: new_entry.stock_code.clone(),
            stock_name: new_entry.stock_name.clone(),
            notes: new_entry.notes.clone().unwrap_or_default(),
            added_at: Utc::now(),
        };

        entries.push(entry.clone());
        self.store.set_json(&watchlist_key(user_id), &entries)?;
        self.store
            .set_json(&watchlist_counter_key(user_id), &(id + 1))?;

        Ok(entry)
    }

    /// Remove every entry with `entry_id`; returns how many were removed
    pub fn remove(&self, user_id: u64, entry_id: u64) -> AuthResult<usize> {
        info!(
            "Removing entry {} from watchlist of user: {}",
            entry_id, user_id
        );

        let mut entries = self.list(user_id)?;
        let before = entries.len();
        entries.retain(|entry| entry.id != entry_id);
        let removed = before - entries.len();

        if removed > 0 {
            self.store.set_json(&watchlist_key(user_id), &entries)?;
        }

        Ok(removed)
    }
}

//! Redis-backed key-value store
//!
//! Keeps the mock backend's records in a Redis instance instead of a local
//! file. Every key is namespaced by a prefix so several mock environments can
//! share one server.

use redis::{Client, Commands, Connection};
use tracing::info;

use crate::{error::StoreResult, store::KeyValueStore};

/// Redis store
pub struct RedisStore {
    client: Client,
    prefix: String,
}

impl RedisStore {
    /// Initialize a new Redis store
    pub fn new(url: &str, prefix: &str) -> StoreResult<Self> {
        let client = Client::open(url)?;
        info!("Redis client initialized with URL: {}", url);
        Ok(Self {
            client,
            prefix: prefix.to_string(),
        })
    }

    /// Get a connection to the server
    fn get_connection(&self) -> StoreResult<Connection> {
        Ok(self.client.get_connection()?)
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.get_connection()?;
        let value: Option<String> = conn.get(self.namespaced(key))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.get_connection()?;
        let _: () = conn.set(self.namespaced(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut conn = self.get_connection()?;
        let _: u64 = conn.del(self.namespaced(key))?;
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.get_connection()?;
        let keys: Vec<String> = conn.keys(format!("{}*", self.prefix))?;
        Ok(keys
            .into_iter()
            .filter_map(|key| key.strip_prefix(&self.prefix).map(str::to_string))
            .collect())
    }

    fn health_check(&self) -> StoreResult<bool> {
        let mut conn = self.get_connection()?;
        let pong: String = redis::cmd("PING").query(&mut conn)?;
        Ok(pong == "PONG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonStoreExt;

    #[test]
    fn test_keys_are_namespaced() {
        let store = RedisStore::new("redis://localhost:6379", "test_ns:").unwrap();
        assert_eq!(store.namespaced("mock_users"), "test_ns:mock_users");
    }

    #[test]
    #[ignore = "requires a running Redis server"]
    fn test_redis_connection() {
        let store = RedisStore::new("redis://localhost:6379", "mock_backend_test:").unwrap();
        assert!(store.health_check().unwrap());
    }

    #[test]
    #[ignore = "requires a running Redis server"]
    fn test_set_get_delete() {
        let store = RedisStore::new("redis://localhost:6379", "mock_backend_test:").unwrap();

        store.set_json("test_key", &vec!["a", "b"]).unwrap();
        assert_eq!(
            store.get_json::<Vec<String>>("test_key").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert!(store.keys().unwrap().contains(&"test_key".to_string()));

        store.delete("test_key").unwrap();
        assert_eq!(store.get("test_key").unwrap(), None);
    }
}

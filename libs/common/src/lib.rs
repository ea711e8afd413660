//! Common library for the mock backend
//!
//! This crate provides shared functionality used across the mock services,
//! including the key-value store that stands in for browser local storage,
//! simulated network latency, and the environment-driven settings layer.
//!
//! ```rust,no_run
//! use common::store::{JsonStoreExt, StoreConfig, open_store};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::from_env()?;
//!     let store = open_store(&config)?;
//!     store.set_json("greeting", &"hello")?;
//!     let greeting: Option<String> = store.get_json("greeting")?;
//!     println!("Stored greeting: {:?}", greeting);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod latency;
pub mod settings;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use latency::Latency;
pub use store::{FileStore, JsonStoreExt, KeyValueStore, MemoryStore, StoreBackend, StoreConfig};

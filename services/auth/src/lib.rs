//! Mock authentication backend for the investment dashboard
//!
//! Simulates user registration, login, token refresh, profiles and a per-user
//! stock watchlist on top of a key-value store. Passwords are kept in
//! plaintext and tokens are unsigned: this is an offline stand-in for a real
//! backend, not production authentication. A real deployment needs salted
//! password hashing and signed, verified tokens.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use auth::{AuthService, models::LoginCredentials, token::TokenConfig};
//! use common::{Latency, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = AuthService::new(
//!         Arc::new(MemoryStore::new()),
//!         TokenConfig::default(),
//!         Latency::default(),
//!     );
//!     service.initialize().await?;
//!     let response = service
//!         .login(LoginCredentials {
//!             username: "demo".to_string(),
//!             password: "demo1234".to_string(),
//!         })
//!         .await?;
//!     println!("Logged in as {}", response.user.name);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod service;
pub mod session;
pub mod token;
pub mod validation;

pub use crate::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use service::AuthService;

//! Mock token service for token issuance and decoding
//!
//! Tokens have the shape `mock-jwt-token.<payload>` where the payload is the
//! standard base64 encoding of the JSON claims. They are not signed: anyone
//! with access to the store can forge one. Decoding only checks that the
//! token is structurally sound.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use common::settings::{get_u64, load_settings};
use config::Config;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{AuthError, AuthResult},
    models::TokenPair,
};

/// Literal tag in front of every mock token
pub const TOKEN_TAG: &str = "mock-jwt-token";

/// Token configuration
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Token expiration time in seconds (default: 24 hours)
    pub token_expiry: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            token_expiry: 86_400,
        }
    }
}

impl TokenConfig {
    /// Read `token_expiry` from the shared settings layer
    pub fn from_settings(settings: &Config) -> AuthResult<Self> {
        Ok(Self {
            token_expiry: get_u64(settings, "token_expiry")?,
        })
    }

    /// Create a new TokenConfig from environment variables
    ///
    /// # Environment Variables
    /// - `MOCK_BACKEND_TOKEN_EXPIRY`: token expiry in seconds (default: 86400)
    pub fn from_env() -> AuthResult<Self> {
        let settings = load_settings()?;
        Self::from_settings(&settings)
    }
}

/// Claims carried by a mock token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub user_id: u64,
    /// Username at issuance
    pub username: String,
    /// Expiration time (unix seconds)
    pub exp: i64,
    /// Issued at time (unix seconds)
    pub iat: i64,
}

/// Mock token service
#[derive(Debug, Clone)]
pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    /// Initialize a new token service
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Issue a token for a user
    pub fn issue(&self, user_id: u64, username: &str) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let expiry = i64::try_from(self.config.token_expiry).unwrap_or(i64::MAX);

        let claims = Claims {
            user_id,
            username: username.to_string(),
            iat: now,
            exp: now.saturating_add(expiry),
        };

        let payload = serde_json::to_vec(&claims).map_err(AuthError::TokenEncoding)?;

        Ok(format!("{}.{}", TOKEN_TAG, STANDARD.encode(payload)))
    }

    /// Issue a token and wrap it as an access/refresh pair
    pub fn issue_pair(&self, user_id: u64, username: &str) -> AuthResult<TokenPair> {
        let token = self.issue(user_id, username)?;
        Ok(TokenPair::single(token, self.config.token_expiry))
    }

    /// Decode a token and return the claims
    ///
    /// Expiry is not checked.
    pub fn decode(&self, token: &str) -> AuthResult<Claims> {
        let (tag, payload) = token.split_once('.').ok_or(AuthError::InvalidToken)?;
        if tag != TOKEN_TAG {
            return Err(AuthError::InvalidToken);
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| AuthError::InvalidToken)?;
        serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidToken)
    }

    /// Re-issue a token for the same user with a fresh expiry
    ///
    /// The old token is not checked for expiry or revocation.
    pub fn refresh(&self, token: &str) -> AuthResult<TokenPair> {
        let claims = self.decode(token)?;
        info!("Refreshing token for user: {}", claims.user_id);
        self.issue_pair(claims.user_id, &claims.username)
    }

    /// Get the token expiry time
    pub fn token_expiry(&self) -> u64 {
        self.config.token_expiry
    }
}

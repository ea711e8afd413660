//! Session and token response models

use serde::{Deserialize, Serialize};

use super::user::PublicUser;

/// Access and refresh token handed out together
///
/// Both tokens carry the same value; the pair shape mirrors a real backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

impl TokenPair {
    /// Use one token for both slots
    pub fn single(token: String, expires_in: u64) -> Self {
        Self {
            access_token: token.clone(),
            refresh_token: token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// Response of a successful login or registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

/// Acknowledgement of an operation without a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

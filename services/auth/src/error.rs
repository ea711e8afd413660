//! Errors returned by the mock authentication service

use common::error::StoreError;
use thiserror::Error;

/// Every way an authentication, profile or watchlist operation can be rejected
#[derive(Error, Debug)]
pub enum AuthError {
    /// The operation needs a logged-in user and there is none
    #[error("Not authenticated")]
    NotAuthenticated,

    /// No stored user matches the username and password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Username already taken
    #[error("Username already exists")]
    DuplicateUsername,

    /// Email already registered
    #[error("Email already exists")]
    DuplicateEmail,

    /// Stock already present in the watchlist
    #[error("Stock already in watchlist")]
    DuplicateStock,

    /// Token is malformed or cannot be decoded
    #[error("Invalid token")]
    InvalidToken,

    /// Current password does not match
    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// The session refers to a user missing from the store
    #[error("User not found")]
    UserNotFound,

    /// Token claims could not be encoded
    #[error("Failed to encode token claims: {0}")]
    TokenEncoding(#[source] serde_json::Error),

    /// Input rejected before touching the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backing store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;

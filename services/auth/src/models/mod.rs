//! Authentication service models

pub mod session;
pub mod user;
pub mod watchlist;

// Re-export for convenience
pub use session::{AuthResponse, Confirmation, TokenPair};
pub use user::{LoginCredentials, NewUser, PasswordChange, PublicUser, UpdateUser, User};
pub use watchlist::{NewWatchlistEntry, WatchlistEntry};

//! Repositories over the key-value store

pub mod user;
pub mod watchlist;

pub use user::UserRepository;
pub use watchlist::WatchlistRepository;

//! Mock authentication and watchlist service
//!
//! Emulates the backend of the investment dashboard on top of a key-value
//! store. Every operation first sleeps for the configured latency, then works
//! synchronously against the store. Operations that need a user read the
//! current session pointer and fail with [`AuthError::NotAuthenticated`] when
//! it is empty.
//!
//! Writers are serialized inside one process. Nothing coordinates separate
//! processes sharing the same store, so concurrent writers there can lose
//! updates.

use std::sync::Arc;

use common::{Latency, store::KeyValueStore};
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    config::AuthConfig,
    error::{AuthError, AuthResult},
    models::{
        AuthResponse, Confirmation, LoginCredentials, NewUser, NewWatchlistEntry, PasswordChange,
        PublicUser, TokenPair, UpdateUser, WatchlistEntry,
    },
    repositories::{UserRepository, WatchlistRepository},
    session::SessionManager,
    token::{TokenConfig, TokenService},
    validation,
};

/// Mock backend for authentication, profile and watchlist operations
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    users: UserRepository,
    watchlist: WatchlistRepository,
    sessions: SessionManager,
    tokens: TokenService,
    latency: Latency,
    write_lock: Arc<Mutex<()>>,
}

impl AuthService {
    /// Build the service over `store`
    ///
    /// Nothing is written until [`AuthService::initialize`] runs.
    pub fn new(store: Arc<dyn KeyValueStore>, token_config: TokenConfig, latency: Latency) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            watchlist: WatchlistRepository::new(store.clone()),
            sessions: SessionManager::new(store.clone()),
            tokens: TokenService::new(token_config),
            store,
            latency,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Build the service from a loaded configuration
    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &AuthConfig) -> Self {
        Self::new(store, config.token.clone(), config.latency)
    }

    /// Seed the demo account if the user set was never written
    ///
    /// Safe to call any number of times; returns whether the seed ran.
    pub async fn initialize(&self) -> AuthResult<bool> {
        let _guard = self.write_lock.lock().await;
        self.users.seed_demo_user()
    }

    /// Register a new user and log them in
    pub async fn register(&self, new_user: NewUser) -> AuthResult<AuthResponse> {
        self.latency.simulate().await;
        info!("Register request for user: {}", new_user.username);

        validation::validate_new_user(&new_user).map_err(AuthError::Validation)?;

        let _guard = self.write_lock.lock().await;
        let user = self.users.create(&new_user)?;
        let public = PublicUser::from(&user);
        let tokens = self.tokens.issue_pair(user.id, &user.username)?;
        self.sessions.create_session(&public, &tokens)?;

        Ok(AuthResponse {
            user: public,
            tokens,
        })
    }

    /// Log in with username and password
    pub async fn login(&self, credentials: LoginCredentials) -> AuthResult<AuthResponse> {
        self.latency.simulate().await;
        info!("Login attempt for user: {}", credentials.username);

        let _guard = self.write_lock.lock().await;
        let user = self
            .users
            .find_by_credentials(&credentials.username, &credentials.password)?
            .ok_or(AuthError::InvalidCredentials)?;

        let public = PublicUser::from(&user);
        let tokens = self.tokens.issue_pair(user.id, &user.username)?;
        self.sessions.create_session(&public, &tokens)?;

        Ok(AuthResponse {
            user: public,
            tokens,
        })
    }

    /// Exchange any structurally valid token for a fresh pair
    ///
    /// Neither expiry nor the session state is checked, and nothing is
    /// persisted.
    pub async fn refresh_token(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        self.latency.simulate().await;
        info!("Token refresh request");

        self.tokens.refresh(refresh_token)
    }

    /// Clear the session; succeeds when already logged out
    pub async fn logout(&self) -> AuthResult<Confirmation> {
        self.latency.simulate().await;
        info!("Logout request");

        let _guard = self.write_lock.lock().await;
        self.sessions.delete_session()?;

        Ok(Confirmation::new("Logged out successfully"))
    }

    /// Logged-in user, without failing when there is none
    pub fn current_user(&self) -> AuthResult<Option<PublicUser>> {
        self.sessions.get_session()
    }

    /// Profile of the logged-in user
    pub async fn get_profile(&self) -> AuthResult<PublicUser> {
        self.latency.simulate().await;
        self.sessions.require_user()
    }

    /// Merge `update` into the logged-in user's profile
    pub async fn update_profile(&self, update: UpdateUser) -> AuthResult<PublicUser> {
        self.latency.simulate().await;

        validation::validate_update(&update).map_err(AuthError::Validation)?;

        let _guard = self.write_lock.lock().await;
        let current = self.sessions.require_user()?;
        info!("Profile update for user: {}", current.id);

        let user = self.users.update(current.id, &update)?;
        let public = PublicUser::from(&user);
        self.sessions.update_session(&public)?;

        Ok(public)
    }

    /// Replace the logged-in user's password
    ///
    /// Existing tokens stay valid and the session is kept.
    pub async fn change_password(&self, change: PasswordChange) -> AuthResult<Confirmation> {
        self.latency.simulate().await;

        let _guard = self.write_lock.lock().await;
        let current = self.sessions.require_user()?;
        info!("Password change for user: {}", current.id);

        let user = self
            .users
            .find_by_id(current.id)?
            .ok_or(AuthError::UserNotFound)?;

        if user.password != change.old_password {
            return Err(AuthError::IncorrectPassword);
        }
        validation::validate_password(&change.new_password).map_err(AuthError::Validation)?;

        self.users.set_password(user.id, &change.new_password)?;

        Ok(Confirmation::new("Password changed successfully"))
    }

    /// Watchlist of the logged-in user
    pub async fn get_watchlist(&self) -> AuthResult<Vec<WatchlistEntry>> {
        self.latency.simulate().await;

        let current = self.sessions.require_user()?;
        self.watchlist.list(current.id)
    }

    /// Whether the logged-in user already tracks `stock_code`
    pub async fn is_in_watchlist(&self, stock_code: &str) -> AuthResult<bool> {
        self.latency.simulate().await;

        let current = self.sessions.require_user()?;
        self.watchlist.contains(current.id, stock_code.trim())
    }

    /// Add a stock to the logged-in user's watchlist
    pub async fn add_to_watchlist(&self, new_entry: NewWatchlistEntry) -> AuthResult<WatchlistEntry> {
        self.latency.simulate().await;

        let stock_code = validation::validate_stock_code(&new_entry.stock_code)
            .map_err(AuthError::Validation)?
            .to_string();
        let new_entry = NewWatchlistEntry {
            stock_code,
            ..new_entry
        };

        let _guard = self.write_lock.lock().await;
        let current = self.sessions.require_user()?;
        self.watchlist.add(current.id, &new_entry)
    }

    /// Remove an entry from the logged-in user's watchlist
    ///
    /// An unknown id is not an error.
    pub async fn remove_from_watchlist(&self, entry_id: u64) -> AuthResult<Confirmation> {
        self.latency.simulate().await;

        let _guard = self.write_lock.lock().await;
        let current = self.sessions.require_user()?;
        let removed = self.watchlist.remove(current.id, entry_id)?;
        info!("Removed {} watchlist entries with id {}", removed, entry_id);

        Ok(Confirmation::new("Removed from watchlist"))
    }

    /// Check that the backing store answers
    pub fn health_check(&self) -> AuthResult<bool> {
        Ok(self.store.health_check()?)
    }
}

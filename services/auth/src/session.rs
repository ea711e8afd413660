//! Current session pointer kept in the key-value store

use std::sync::Arc;

use common::store::{JsonStoreExt, KeyValueStore};
use tracing::info;

use crate::{
    error::{AuthError, AuthResult},
    models::{PublicUser, TokenPair},
};

pub const CURRENT_USER_KEY: &str = "current_user";
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Session manager for the single logged-in user of this store
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Point the session at `user` and persist its tokens
    pub fn create_session(&self, user: &PublicUser, tokens: &TokenPair) -> AuthResult<()> {
        info!("Creating session for user: {}", user.id);

        self.store.set_json(CURRENT_USER_KEY, user)?;
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token)?;

        Ok(())
    }

    /// Get the logged-in user, if any
    pub fn get_session(&self) -> AuthResult<Option<PublicUser>> {
        Ok(self.store.get_json(CURRENT_USER_KEY)?)
    }

    /// Get the logged-in user or fail with `NotAuthenticated`
    pub fn require_user(&self) -> AuthResult<PublicUser> {
        self.get_session()?.ok_or(AuthError::NotAuthenticated)
    }

    /// Replace the stored user view, keeping the tokens
    pub fn update_session(&self, user: &PublicUser) -> AuthResult<()> {
        info!("Updating session for user: {}", user.id);

        self.store.set_json(CURRENT_USER_KEY, user)?;
        Ok(())
    }

    /// Stored access token, if any
    pub fn access_token(&self) -> AuthResult<Option<String>> {
        Ok(self.store.get(ACCESS_TOKEN_KEY)?)
    }

    /// Stored refresh token, if any
    pub fn refresh_token(&self) -> AuthResult<Option<String>> {
        Ok(self.store.get(REFRESH_TOKEN_KEY)?)
    }

    /// Clear the session pointer and tokens; clearing an empty session is fine
    pub fn delete_session(&self) -> AuthResult<()> {
        info!("Deleting current session");

        self.store.delete(CURRENT_USER_KEY)?;
        self.store.delete(ACCESS_TOKEN_KEY)?;
        self.store.delete(REFRESH_TOKEN_KEY)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::store::MemoryStore;

    fn user() -> PublicUser {
        PublicUser {
            id: 1,
            username: "demo".to_string(),
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_session_lifecycle() {
        let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
        assert!(matches!(
            sessions.require_user(),
            Err(AuthError::NotAuthenticated)
        ));

        let tokens = TokenPair::single("tok".to_string(), 60);
        sessions.create_session(&user(), &tokens).unwrap();
        assert_eq!(sessions.require_user().unwrap().username, "demo");
        assert_eq!(sessions.access_token().unwrap().as_deref(), Some("tok"));
        assert_eq!(sessions.refresh_token().unwrap().as_deref(), Some("tok"));

        sessions.delete_session().unwrap();
        assert_eq!(sessions.get_session().unwrap(), None);
        assert_eq!(sessions.access_token().unwrap(), None);

        // Idempotent
        sessions.delete_session().unwrap();
    }
}

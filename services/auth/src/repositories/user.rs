//! User repository for key-value store operations

use std::sync::Arc;

use chrono::Utc;
use common::store::{JsonStoreExt, KeyValueStore};
use tracing::info;

use crate::{
    error::{AuthError, AuthResult},
    models::{NewUser, UpdateUser, User},
};

/// Key holding the full user set
pub const USERS_KEY: &str = "mock_users";

/// Credentials of the account seeded into a fresh store
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo1234";
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_NAME: &str = "Demo User";

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn KeyValueStore>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Seed the demo account when the user set has never been written
    ///
    /// Returns whether the seed ran. An existing user set, even an empty one,
    /// is left alone so repeated calls never duplicate the demo user.
    pub fn seed_demo_user(&self) -> AuthResult<bool> {
        if self.store.get(USERS_KEY)?.is_some() {
            return Ok(false);
        }

        info!("Seeding demo user: {}", DEMO_USERNAME);
        let demo = User {
            id: 1,
            username: DEMO_USERNAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            name: DEMO_NAME.to_string(),
            created_at: Utc::now(),
        };
        self.save_all(&[demo])?;
        Ok(true)
    }

    /// Load every stored user
    pub fn all(&self) -> AuthResult<Vec<User>> {
        Ok(self.store.get_json(USERS_KEY)?.unwrap_or_default())
    }

    /// Replace the stored user set
    pub fn save_all(&self, users: &[User]) -> AuthResult<()> {
        self.store.set_json(USERS_KEY, users)?;
        Ok(())
    }

    /// Create a new user
    ///
    /// The id is one past the highest existing id, which equals the user count
    /// because users are never deleted.
    pub fn create(&self, new_user: &NewUser) -> AuthResult<User> {
        info!("Creating new user: {}", new_user.username);

        let mut users = self.all()?;

        if users.iter().any(|u| u.username == new_user.username) {
            return Err(AuthError::DuplicateUsername);
        }
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AuthError::DuplicateEmail);
        }

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            password: new_user.password.clone(),
            name: new_user
                .name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| new_user.username.clone()),
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.save_all(&users)?;

        Ok(user)
    }

    /// Find a user whose username and password both match exactly
    pub fn find_by_credentials(&self, username: &str, password: &str) -> AuthResult<Option<User>> {
        info!("Finding user by credentials: {}", username);

        Ok(self
            .all()?
            .into_iter()
            .find(|u| u.username == username && u.password == password))
    }

    /// Find a user by ID
    pub fn find_by_id(&self, id: u64) -> AuthResult<Option<User>> {
        Ok(self.all()?.into_iter().find(|u| u.id == id))
    }

    /// Merge `update` into the user with `id`, keeping the id
    pub fn update(&self, id: u64, update: &UpdateUser) -> AuthResult<User> {
        info!("Updating user: {}", id);

        let mut users = self.all()?;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AuthError::UserNotFound)?;

        if let Some(username) = &update.username {
            if users.iter().any(|u| u.id != id && &u.username == username) {
                return Err(AuthError::DuplicateUsername);
            }
        }
        if let Some(email) = &update.email {
            if users.iter().any(|u| u.id != id && &u.email == email) {
                return Err(AuthError::DuplicateEmail);
            }
        }

        update.apply(&mut users[index]);
        let user = users[index].clone();
        self.save_all(&users)?;

        Ok(user)
    }

    /// Overwrite the password of the user with `id`
    pub fn set_password(&self, id: u64, password: &str) -> AuthResult<()> {
        info!("Updating password for user: {}", id);

        let mut users = self.all()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AuthError::UserNotFound)?;
        user.password = password.to_string();
        self.save_all(&users)
    }
}

//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as kept in the store
///
/// The password is stored in plaintext. This is a client-side simulation of a
/// backend, not an authentication boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// User without the password, safe to hand to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Profile update payload; absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl UpdateUser {
    /// Merge the supplied fields into `user`
    pub fn apply(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
    }
}

/// User login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Password change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 3,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            name: "Alice".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_user_omits_password() {
        let user = sample_user();
        let public = PublicUser::from(&user);

        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn test_update_merges_only_supplied_fields() {
        let mut user = sample_user();
        let update = UpdateUser {
            name: Some("Alice Kim".to_string()),
            ..Default::default()
        };

        update.apply(&mut user);
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Alice Kim");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
    }
}

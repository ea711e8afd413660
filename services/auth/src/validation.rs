//! Input checks applied before anything touches the store
//!
//! The mock accepts any non-blank username, email and password. Only values
//! that would leave an unusable account behind are rejected.

use crate::models::{NewUser, UpdateUser};

/// Longest accepted stock code
pub const MAX_STOCK_CODE_LEN: usize = 20;

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

/// Check the fields of a registration request
pub fn validate_new_user(new_user: &NewUser) -> Result<(), String> {
    require("Username", &new_user.username)?;
    require("Email", &new_user.email)?;
    validate_password(&new_user.password)
}

/// Check the fields a profile update supplies
///
/// Absent fields are left alone, but a supplied username or email cannot be
/// blanked out.
pub fn validate_update(update: &UpdateUser) -> Result<(), String> {
    if let Some(username) = &update.username {
        require("Username", username)?;
    }
    if let Some(email) = &update.email {
        require("Email", email)?;
    }
    Ok(())
}

/// A password only has to be non-empty
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

/// Validate a stock code and return it trimmed
pub fn validate_stock_code(stock_code: &str) -> Result<&str, String> {
    let trimmed = stock_code.trim();

    if trimmed.is_empty() {
        return Err("Stock code is required".to_string());
    }

    if trimmed.chars().count() > MAX_STOCK_CODE_LEN {
        return Err(format!(
            "Stock code must be at most {} characters long",
            MAX_STOCK_CODE_LEN
        ));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: None,
        }
    }

    #[test]
    fn test_short_and_loose_inputs_are_accepted() {
        assert!(validate_new_user(&new_user("jo", "jo@corp", "123")).is_ok());
        assert!(validate_new_user(&new_user("demo", "demo@example.com", "demo1234")).is_ok());
        assert!(validate_new_user(&new_user("first last", "nobody", "x")).is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert_eq!(
            validate_new_user(&new_user("  ", "a@b", "pw")),
            Err("Username is required".to_string())
        );
        assert_eq!(
            validate_new_user(&new_user("jo", "", "pw")),
            Err("Email is required".to_string())
        );
        assert_eq!(
            validate_new_user(&new_user("jo", "a@b", "")),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn test_update_checks_only_supplied_fields() {
        assert!(validate_update(&UpdateUser::default()).is_ok());
        assert!(
            validate_update(&UpdateUser {
                email: Some("x@y".to_string()),
                ..Default::default()
            })
            .is_ok()
        );
        assert!(
            validate_update(&UpdateUser {
                username: Some(" ".to_string()),
                ..Default::default()
            })
            .is_err()
        );
    }

    #[test]
    fn test_stock_code_is_trimmed() {
        assert_eq!(validate_stock_code("  005930 "), Ok("005930"));
        assert!(validate_stock_code("   ").is_err());
        assert!(validate_stock_code(&"9".repeat(21)).is_err());
    }
}

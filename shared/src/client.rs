//! Auth request/response types shared between server and clients

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{Role, UserInfo};

/// Upper bound on raw password length, applied before hashing
pub const MAX_PASSWORD_LEN: usize = 128;

/// Password policy: 8-128 chars, one letter, one digit, one symbol
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 {
        return Err(ValidationError::new("password_length")
            .with_message("Be at least 8 characters long".into()));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(ValidationError::new("password_length")
            .with_message("Be at most 128 characters long".into()));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new("password_letter")
            .with_message("Contain at least one letter".into()));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("password_digit")
            .with_message("Contain at least one number".into()));
    }
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new("password_symbol")
            .with_message("Contain at least one special character".into()));
    }
    Ok(())
}

fn default_register_role() -> Role {
    Role::Customer
}

/// Self-service registration request
///
/// Staff roles (`admin`, `co-owner`) are never self-assigned; they are
/// created through the staff endpoint by someone already authorized.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(custom(function = validate_password))]
    pub password: String,
    #[serde(default = "default_register_role")]
    pub role: Role,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_policy() {
        assert!(validate_password("Abc12345!").is_ok());
        assert!(validate_password("short1!").is_err()); // too short
        assert!(validate_password("abcdefgh!").is_err()); // no digit
        assert!(validate_password("12345678!").is_err()); // no letter
        assert!(validate_password("Abc123456").is_err()); // no symbol

        let long = format!("Abc123!{}", "x".repeat(MAX_PASSWORD_LEN));
        assert!(validate_password(&long).is_err()); // over the cap
    }

    #[test]
    fn register_defaults_to_customer() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name":"Jo","email":"jo@x.com","password":"Abc12345!"}"#)
                .unwrap();
        assert_eq!(req.role, Role::Customer);
    }
}

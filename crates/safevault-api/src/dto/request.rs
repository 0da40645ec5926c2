//! Request DTOs with validation.
//!
//! Field names also accept their PascalCase spelling so that clients
//! written against case-insensitive JSON binders keep working.

use serde::{Deserialize, Serialize};
use validator::Validate;

use safevault_service::CreateUserRequest;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[serde(default, alias = "Username")]
    #[validate(length(min = 1, max = 100, message = "Username and password are required"))]
    pub username: String,
    /// Password.
    #[serde(default, alias = "Password")]
    #[validate(length(min = 1, max = 256, message = "Username and password are required"))]
    pub password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddUserRequest {
    /// Username.
    #[serde(default, alias = "Username")]
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,
    /// Password.
    #[serde(default, alias = "Password")]
    #[validate(length(min = 1, max = 256, message = "Password must be 1-256 characters"))]
    pub password: String,
    /// Role name; defaults to `User`.
    #[serde(default, alias = "Role")]
    #[validate(length(max = 16))]
    pub role: Option<String>,
    /// Email.
    #[serde(default, alias = "Email")]
    #[validate(length(max = 254))]
    pub email: Option<String>,
}

impl From<AddUserRequest> for CreateUserRequest {
    fn from(req: AddUserRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            role: req.role,
            email: req.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_fields_are_accepted() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"Username":"admin","Password":"admin"}"#).unwrap();
        assert_eq!(req.username, "admin");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_login_fails_validation() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"","password":""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_oversized_username_fails_validation() {
        let req = AddUserRequest {
            username: "a".repeat(101),
            password: "pw".to_string(),
            role: None,
            email: None,
        };
        assert!(req.validate().is_err());
    }
}

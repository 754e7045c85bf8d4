pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Payload for a user registration request.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    /// Display name for the new account.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Email address, used as the login key.
    #[validate(email)]
    pub email: String,
    /// Password, at least 6 characters. Only a bcrypt hash of it is stored.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Payload for a login request.
///
/// Deliberately not run through `validator`: a malformed email and a wrong
/// password must be indistinguishable to the caller, so anything that is not
/// an exact credential match comes back as the same 401.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login: the public profile plus a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "Secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_name = RegisterRequest {
            name: "".to_string(),
            email: "a@x.com".to_string(),
            password: "Secret1".to_string(),
        };
        assert!(empty_name.validate().is_err());

        let bad_email = RegisterRequest {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            password: "Secret1".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "123".to_string(),
        };
        assert!(short_password.validate().is_err());
    }
}

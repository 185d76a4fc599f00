use serde::{Deserialize, Serialize};

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
}

/// Signup request for a new member account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignupRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
}

#[cfg(test)]
#[cfg(feature = "validation")]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn login_request_rejects_malformed_email() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: "secret123".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn signup_request_rejects_short_password() {
        let req = SignupRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: "abc".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_signup_request_passes() {
        let req = SignupRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "secret123".into(),
        };
        assert!(req.validate().is_ok());
    }
}

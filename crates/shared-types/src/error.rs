use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    BackendError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::BackendError => write!(f, "BackendError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across the backend boundary and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Forbidden,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BackendError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Map an identity-provider error code (e.g. `INVALID_PASSWORD`) to an
    /// error with a message fit for inline display on a login form.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                Self::unauthorized("Invalid email or password.")
            }
            "USER_DISABLED" => Self::forbidden("This account has been disabled."),
            "EMAIL_EXISTS" => Self::bad_request("An account with this email already exists."),
            "WEAK_PASSWORD" => Self::bad_request("Password is too weak (minimum 6 characters)."),
            "TOO_MANY_ATTEMPTS_TRY_LATER" => {
                Self::unauthorized("Too many attempts. Please try again later.")
            }
            other => Self::backend(format!("Authentication failed ({other})")),
        }
    }

    /// A user-facing message for this error. Falls back to a generic line for
    /// kinds whose raw message may carry backend internals.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::BackendError | AppErrorKind::InternalError => {
                "Something went wrong. Please try again.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_error_has_correct_kind() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "bad credentials");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn provider_code_maps_bad_credentials() {
        for code in ["EMAIL_NOT_FOUND", "INVALID_PASSWORD", "INVALID_LOGIN_CREDENTIALS"] {
            let err = AppError::from_provider_code(code);
            assert_eq!(err.kind, AppErrorKind::Unauthorized);
            assert_eq!(err.message, "Invalid email or password.");
        }
    }

    #[test]
    fn provider_code_maps_duplicate_email() {
        let err = AppError::from_provider_code("EMAIL_EXISTS");
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn unknown_provider_code_falls_back_to_backend_kind() {
        let err = AppError::from_provider_code("SOMETHING_NEW");
        assert_eq!(err.kind, AppErrorKind::BackendError);
        assert!(err.message.contains("SOMETHING_NEW"));
    }

    #[test]
    fn friendly_message_hides_backend_internals() {
        let err = AppError::backend("connection reset by peer");
        assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn friendly_message_passes_through_auth_message() {
        let err = AppError::unauthorized("Invalid email or password.");
        assert_eq!(err.friendly_message(), "Invalid email or password.");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}

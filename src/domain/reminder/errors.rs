//! Reminder-specific error types.
//!
//! Errors raised by the reminder, notification, sweep and payment operations.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | MissingFields | 400 |
//! | ValidationFailed | 400 |
//! | InvalidSignature | 400 |
//! | Unauthenticated | 401 |
//! | PaymentGateway | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ReminderId, ValidationError};

/// Reminder-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    /// Referenced reminder does not exist.
    NotFound(ReminderId),

    /// One or more required request fields are absent.
    MissingFields(String),

    /// A field is present but malformed.
    ValidationFailed { field: String, message: String },

    /// Gateway signature did not match.
    InvalidSignature,

    /// No caller identity could be resolved.
    Unauthenticated,

    /// The payment gateway rejected or failed a call.
    PaymentGateway(String),

    /// Store or other dependency failure.
    Infrastructure(String),
}

impl ReminderError {
    pub fn not_found(id: ReminderId) -> Self {
        ReminderError::NotFound(id)
    }

    pub fn missing_fields(message: impl Into<String>) -> Self {
        ReminderError::MissingFields(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReminderError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn payment_gateway(message: impl Into<String>) -> Self {
        ReminderError::PaymentGateway(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReminderError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ReminderError::NotFound(_) => ErrorCode::ReminderNotFound,
            ReminderError::MissingFields(_)
            | ReminderError::ValidationFailed { .. }
            | ReminderError::InvalidSignature => ErrorCode::ValidationFailed,
            ReminderError::Unauthenticated => ErrorCode::Unauthorized,
            ReminderError::PaymentGateway(_) => ErrorCode::ExternalServiceError,
            ReminderError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Client-facing message.
    pub fn message(&self) -> String {
        match self {
            ReminderError::NotFound(_) => "Reminder not found".to_string(),
            ReminderError::MissingFields(message) => message.clone(),
            ReminderError::ValidationFailed { message, .. } => message.clone(),
            ReminderError::InvalidSignature => "Invalid signature".to_string(),
            ReminderError::Unauthenticated => "User not authenticated".to_string(),
            ReminderError::PaymentGateway(_) => "Payment gateway request failed".to_string(),
            ReminderError::Infrastructure(_) => "Internal server error".to_string(),
        }
    }
}

impl std::fmt::Display for ReminderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderError::NotFound(id) => write!(f, "Reminder not found: {}", id),
            ReminderError::PaymentGateway(detail) => write!(f, "Payment gateway error: {}", detail),
            ReminderError::Infrastructure(detail) => write!(f, "Infrastructure error: {}", detail),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for ReminderError {}

impl From<ValidationError> for ReminderError {
    fn from(err: ValidationError) -> Self {
        ReminderError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for ReminderError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => {
                let field = err.details.get("field").cloned().unwrap_or_default();
                ReminderError::validation(field, err.message)
            }
            ErrorCode::Unauthorized => ReminderError::Unauthenticated,
            _ => ReminderError::infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_reminder_code() {
        let err = ReminderError::not_found(ReminderId::new());
        assert_eq!(err.code(), ErrorCode::ReminderNotFound);
        assert_eq!(err.message(), "Reminder not found");
    }

    #[test]
    fn infrastructure_message_hides_detail() {
        let err = ReminderError::infrastructure("connection refused");
        assert_eq!(err.message(), "Internal server error");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn database_domain_error_becomes_infrastructure() {
        let err: ReminderError = DomainError::database("boom").into();
        assert!(matches!(err, ReminderError::Infrastructure(_)));
    }

    #[test]
    fn validation_domain_error_keeps_field() {
        let err: ReminderError = DomainError::validation("amount", "bad amount").into();
        assert_eq!(
            err,
            ReminderError::ValidationFailed {
                field: "amount".to_string(),
                message: "bad amount".to_string()
            }
        );
    }
}

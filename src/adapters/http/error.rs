//! Conversion of `ReminderError` into HTTP responses.
//!
//! Bodies follow the `{success: false, message}` envelope the web client
//! reads. Server-side failures carry an operation-specific message and the
//! underlying detail in `error`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::foundation::DomainError;
use crate::domain::reminder::ReminderError;

/// API error type that converts reminder errors to HTTP responses.
#[derive(Debug)]
pub struct ReminderApiError {
    error: ReminderError,
    failure_message: Option<&'static str>,
}

impl ReminderApiError {
    /// Overrides the message shown for 5xx responses.
    pub fn with_failure_message(mut self, message: &'static str) -> Self {
        self.failure_message = Some(message);
        self
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            ReminderError::NotFound(_) => StatusCode::NOT_FOUND,
            ReminderError::MissingFields(_)
            | ReminderError::ValidationFailed { .. }
            | ReminderError::InvalidSignature => StatusCode::BAD_REQUEST,
            ReminderError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ReminderError::PaymentGateway(_) | ReminderError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ReminderError> for ReminderApiError {
    fn from(error: ReminderError) -> Self {
        Self {
            error,
            failure_message: None,
        }
    }
}

impl From<DomainError> for ReminderApiError {
    fn from(err: DomainError) -> Self {
        ReminderError::from(err).into()
    }
}

impl IntoResponse for ReminderApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error.code().to_string();

        let body = match &self.error {
            ReminderError::Unauthenticated => json!({ "error": self.error.message() }),
            ReminderError::InvalidSignature => json!({
                "success": false,
                "validated": false,
                "message": self.error.message(),
                "code": code,
            }),
            ReminderError::PaymentGateway(detail) | ReminderError::Infrastructure(detail) => {
                tracing::error!(error = %self.error, "Request failed");
                json!({
                    "success": false,
                    "message": self.failure_message.map(String::from).unwrap_or_else(|| self.error.message()),
                    "error": detail,
                    "code": code,
                })
            }
            _ => json!({
                "success": false,
                "message": self.error.message(),
                "code": code,
            }),
        };

        (status, Json(body)).into_response()
    }
}

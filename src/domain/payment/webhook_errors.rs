//! Webhook error types for Razorpay webhook handling.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur while accepting a webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No signature header was sent.
    #[error("missing signature")]
    MissingSignature,

    /// Signature does not match the raw body.
    #[error("invalid signature")]
    InvalidSignature,

    /// Signature valid but the body could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl WebhookError {
    /// All webhook rejections are client errors; the gateway will not retry them.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingSignature
            | WebhookError::InvalidSignature
            | WebhookError::ParseError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_displays_correctly() {
        assert_eq!(WebhookError::InvalidSignature.to_string(), "invalid signature");
    }

    #[test]
    fn parse_error_displays_message() {
        let err = WebhookError::ParseError("expected value".to_string());
        assert_eq!(err.to_string(), "Parse error: expected value");
    }

    #[test]
    fn every_rejection_is_bad_request() {
        for err in [
            WebhookError::MissingSignature,
            WebhookError::InvalidSignature,
            WebhookError::ParseError("x".to_string()),
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }
}

//! Email adapters implementing the `Notifier` port.
//!
//! - `SmtpNotifier` - SMTP relay (lettre)
//! - `ResendNotifier` - Resend HTTP API
//! - `SendGridNotifier` - SendGrid HTTP API
//! - `BoundedNotifier` - send timeout decorator
//! - `RecordingNotifier` - in-memory outbox for tests
//!
//! [`notifier_from_config`] picks one provider at startup and wraps it in the
//! timeout decorator.

mod bounded;
mod recording;
mod resend;
mod sendgrid;
mod smtp;

pub use bounded::BoundedNotifier;
pub use recording::RecordingNotifier;
pub use resend::ResendNotifier;
pub use sendgrid::SendGridNotifier;
pub use smtp::SmtpNotifier;

use std::sync::Arc;

use crate::config::{EmailConfig, EmailProvider};
use crate::ports::{Notifier, NotifierError};

/// Builds the configured notifier, bounded by the configured send timeout.
///
/// # Errors
///
/// Propagates construction failures from the SMTP transport.
pub fn notifier_from_config(config: &EmailConfig) -> Result<Arc<dyn Notifier>, NotifierError> {
    let provider: Arc<dyn Notifier> = match config.provider {
        EmailProvider::Smtp => Arc::new(SmtpNotifier::from_config(config)?),
        EmailProvider::Resend => Arc::new(ResendNotifier::new(
            config.resend_api_key.clone(),
            config.from_header(),
        )),
        EmailProvider::Sendgrid => Arc::new(SendGridNotifier::new(
            config.sendgrid_api_key.clone(),
            config.sender_address(),
            config.from_name.clone(),
        )),
    };

    tracing::info!(provider = ?config.provider, "Email notifier configured");
    Ok(Arc::new(BoundedNotifier::new(provider, config.send_timeout())))
}

/// 4xx responses are refusals; everything else is treated as transient.
fn classify_status(status: reqwest::StatusCode, body: String) -> NotifierError {
    if status.is_client_error() {
        NotifierError::Rejected(body)
    } else {
        NotifierError::Transport(format!("{}: {}", status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_http_provider() {
        let config = EmailConfig {
            provider: EmailProvider::Resend,
            resend_api_key: "re_key".to_string(),
            from_email: "noreply@payble.app".to_string(),
            ..Default::default()
        };
        assert!(notifier_from_config(&config).is_ok());

        let config = EmailConfig {
            provider: EmailProvider::Sendgrid,
            sendgrid_api_key: "SG.key".to_string(),
            ..config
        };
        assert!(notifier_from_config(&config).is_ok());
    }

    #[test]
    fn status_classification() {
        assert!(matches!(
            classify_status(reqwest::StatusCode::BAD_REQUEST, "x".into()),
            NotifierError::Rejected(_)
        ));
        assert!(matches!(
            classify_status(reqwest::StatusCode::BAD_GATEWAY, "x".into()),
            NotifierError::Transport(_)
        ));
    }
}

//! Notifier port for outbound email.
//!
//! One capability, several providers: SMTP relay, Resend and SendGrid
//! adapters implement this trait and one is chosen from configuration at
//! startup.
//!
//! # Contract
//!
//! Implementations must:
//! - Treat an empty recipient as a no-op (log a warning, return `Ok`)
//! - Return `NotifierError::Rejected` when the provider refuses the message
//! - Return `NotifierError::Transport` for connectivity failures

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::notification::EmailContent;

/// A plain-text email addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, content: EmailContent) -> Self {
        Self {
            to: to.into(),
            subject: content.subject,
            body: content.body,
        }
    }

    /// Returns true when there is no address to deliver to.
    pub fn has_no_recipient(&self) -> bool {
        self.to.trim().is_empty()
    }
}

/// Email delivery failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifierError {
    /// The provider did not answer in time.
    #[error("email send timed out after {0:?}")]
    Timeout(Duration),

    /// Recipient or sender address could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The provider refused the message.
    #[error("provider rejected message: {0}")]
    Rejected(String),

    /// Network or protocol failure talking to the provider.
    #[error("transport error: {0}")]
    Transport(String),
}

impl NotifierError {
    /// Returns true if a later attempt could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, NotifierError::Timeout(_) | NotifierError::Transport(_))
    }
}

/// Sends emails through a transactional email provider.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message`.
    ///
    /// # Errors
    ///
    /// See [`NotifierError`]. A blank recipient is not an error.
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn Notifier) {}
    }

    #[test]
    fn message_takes_subject_and_body_from_content() {
        let message = EmailMessage::new("a@b.com", EmailContent::new("Hi", "Body"));
        assert_eq!(message.subject, "Hi");
        assert_eq!(message.body, "Body");
        assert!(!message.has_no_recipient());
        assert!(EmailMessage::new(" ", EmailContent::new("Hi", "Body")).has_no_recipient());
    }

    #[test]
    fn timeouts_are_transient() {
        assert!(NotifierError::Timeout(Duration::from_secs(5)).is_transient());
        assert!(!NotifierError::Rejected("bad sender".to_string()).is_transient());
    }
}

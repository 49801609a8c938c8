//! SMTP notifier.
//!
//! Sends plain-text mail through an authenticated relay. Port 465 uses
//! implicit TLS; any other port upgrades with STARTTLS. The pooled transport is
//! built once and shared by every send.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailConfig;
use crate::ports::{EmailMessage, Notifier, NotifierError};

const IMPLICIT_TLS_PORT: u16 = 465;

/// Notifier backed by an SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Builds the relay transport from configuration.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` for an unparseable sender, `Transport` if the relay
    /// host cannot be used for TLS.
    pub fn from_config(config: &EmailConfig) -> Result<Self, NotifierError> {
        let from: Mailbox = config
            .from_header()
            .parse()
            .map_err(|e: lettre::address::AddressError| NotifierError::InvalidAddress(e.to_string()))?;

        let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        }
        .map_err(|e| NotifierError::Transport(e.to_string()))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, NotifierError> {
        let to: Mailbox = message
            .to
            .trim()
            .parse()
            .map_err(|e: lettre::address::AddressError| NotifierError::InvalidAddress(e.to_string()))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| NotifierError::Rejected(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        if message.has_no_recipient() {
            tracing::warn!("send called without a recipient; skipping");
            return Ok(());
        }

        let email = self.build_message(message)?;

        let response = self.transport.send(email).await.map_err(|e| {
            tracing::error!(recipient = %message.to, error = %e, "SMTP send failed");
            if e.is_permanent() {
                NotifierError::Rejected(e.to_string())
            } else {
                NotifierError::Transport(e.to_string())
            }
        })?;

        tracing::info!(
            recipient = %message.to,
            code = %response.code(),
            "Email sent via SMTP"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::EmailContent;

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_user: "bills@example.com".to_string(),
            smtp_password: "app-password".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_message_with_configured_sender() {
        let notifier = SmtpNotifier::from_config(&config()).unwrap();
        let message = EmailMessage::new("user@example.com", EmailContent::new("Subject", "Body"));

        let built = notifier.build_message(&message).unwrap();
        let raw = String::from_utf8(built.formatted()).unwrap();

        assert!(raw.contains("From: Payble <bills@example.com>"));
        assert!(raw.contains("To: user@example.com"));
        assert!(raw.contains("Subject: Subject"));
    }

    #[tokio::test]
    async fn invalid_recipient_is_rejected_before_sending() {
        let notifier = SmtpNotifier::from_config(&config()).unwrap();
        let message = EmailMessage::new("not-an-address", EmailContent::new("S", "B"));

        assert!(matches!(
            notifier.build_message(&message),
            Err(NotifierError::InvalidAddress(_))
        ));
    }

    #[tokio::test]
    async fn empty_recipient_is_a_no_op() {
        let notifier = SmtpNotifier::from_config(&config()).unwrap();
        let message = EmailMessage::new("", EmailContent::new("S", "B"));

        assert!(notifier.send(&message).await.is_ok());
    }

    #[test]
    fn invalid_sender_fails_construction() {
        let config = EmailConfig {
            from_email: "nope".to_string(),
            ..config()
        };
        assert!(matches!(
            SmtpNotifier::from_config(&config),
            Err(NotifierError::InvalidAddress(_))
        ));
    }
}

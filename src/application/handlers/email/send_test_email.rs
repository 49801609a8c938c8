//! SendTestEmailHandler - sends a fixed message to check the email setup.

use std::sync::Arc;

use crate::domain::notification::templates;
use crate::domain::reminder::ReminderError;
use crate::ports::{EmailMessage, Notifier};

#[derive(Debug, Clone)]
pub struct SendTestEmailCommand {
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTestEmailResult {
    pub recipient: String,
}

pub struct SendTestEmailHandler {
    notifier: Arc<dyn Notifier>,
}

impl SendTestEmailHandler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub async fn handle(&self, cmd: SendTestEmailCommand) -> Result<SendTestEmailResult, ReminderError> {
        let recipient = cmd
            .to
            .map(|to| to.trim().to_string())
            .filter(|to| !to.is_empty())
            .ok_or_else(|| ReminderError::missing_fields("to is required"))?;

        self.notifier
            .send(&EmailMessage::new(&recipient, templates::test_email()))
            .await
            .map_err(|e| {
                tracing::error!(recipient = %recipient, error = %e, "Test email failed");
                ReminderError::infrastructure(format!("test email failed: {}", e))
            })?;

        tracing::info!(recipient = %recipient, "Test email sent");
        Ok(SendTestEmailResult { recipient })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingNotifier;

    #[tokio::test]
    async fn sends_test_template() {
        let notifier = RecordingNotifier::new();
        let handler = SendTestEmailHandler::new(Arc::new(notifier.clone()));

        let result = handler
            .handle(SendTestEmailCommand {
                to: Some(" me@example.com ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.recipient, "me@example.com");
        let sent = notifier.sent().await;
        assert_eq!(sent[0].subject, "Test from Payble");
    }

    #[tokio::test]
    async fn missing_recipient_is_rejected() {
        let handler = SendTestEmailHandler::new(Arc::new(RecordingNotifier::new()));

        let err = handler.handle(SendTestEmailCommand { to: None }).await.unwrap_err();

        assert!(matches!(err, ReminderError::MissingFields(_)));
    }

    #[tokio::test]
    async fn send_failure_is_infrastructure_error() {
        let handler = SendTestEmailHandler::new(Arc::new(
            RecordingNotifier::new().failing_for("me@example.com"),
        ));

        let err = handler
            .handle(SendTestEmailCommand {
                to: Some("me@example.com".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ReminderError::Infrastructure(_)));
    }
}

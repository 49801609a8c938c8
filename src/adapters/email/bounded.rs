//! Timeout decorator for notifiers.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::ports::{EmailMessage, Notifier, NotifierError};

/// Wraps a notifier so no send can outlive `timeout`.
pub struct BoundedNotifier {
    inner: Arc<dyn Notifier>,
    timeout: Duration,
}

impl BoundedNotifier {
    pub fn new(inner: Arc<dyn Notifier>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl Notifier for BoundedNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        match tokio::time::timeout(self.timeout, self.inner.send(message)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    recipient = %message.to,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Email send timed out"
                );
                Err(NotifierError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingNotifier;
    use crate::domain::notification::EmailContent;

    fn message() -> EmailMessage {
        EmailMessage::new("user@example.com", EmailContent::new("S", "B"))
    }

    #[tokio::test]
    async fn passes_through_fast_sends() {
        let recorder = Arc::new(RecordingNotifier::new());
        let bounded = BoundedNotifier::new(recorder.clone(), Duration::from_secs(1));

        bounded.send(&message()).await.unwrap();

        assert_eq!(recorder.sent().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_send_times_out() {
        let slow = Arc::new(RecordingNotifier::new().with_delay(Duration::from_secs(30)));
        let bounded = BoundedNotifier::new(slow, Duration::from_secs(2));

        let result = bounded.send(&message()).await;

        assert_eq!(result, Err(NotifierError::Timeout(Duration::from_secs(2))));
    }

    #[tokio::test]
    async fn inner_errors_are_preserved() {
        let failing = Arc::new(RecordingNotifier::new().failing_for("user@example.com"));
        let bounded = BoundedNotifier::new(failing, Duration::from_secs(1));

        assert!(matches!(bounded.send(&message()).await, Err(NotifierError::Rejected(_))));
    }
}

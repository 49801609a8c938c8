//! Recording notifier for tests and dry runs.
//!
//! Captures every delivered message instead of sending it. Supports
//! per-recipient failure injection and an artificial delay.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::ports::{EmailMessage, Notifier, NotifierError};

/// Notifier that records messages in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    failing: HashSet<String>,
    delay: Option<Duration>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends to `recipient` fail with `Rejected`.
    pub fn failing_for(mut self, recipient: impl Into<String>) -> Self {
        self.failing.insert(recipient.into());
        self
    }

    /// Every send sleeps for `delay` first.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Messages delivered so far.
    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().await.clone()
    }

    /// Messages delivered to `recipient`.
    pub async fn sent_to(&self, recipient: &str) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|m| m.to == recipient)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if message.has_no_recipient() {
            tracing::warn!("send called without a recipient; skipping");
            return Ok(());
        }

        if self.failing.contains(&message.to) {
            return Err(NotifierError::Rejected(format!(
                "recipient {} configured to fail",
                message.to
            )));
        }

        self.sent.lock().await.push(message.clone());
        Ok(())
    }
}

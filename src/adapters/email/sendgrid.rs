//! SendGrid v3 mail-send notifier.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::ports::{EmailMessage, Notifier, NotifierError};

use super::classify_status;

const DEFAULT_BASE_URL: &str = "https://api.sendgrid.com";

/// Notifier backed by SendGrid's `/v3/mail/send`.
pub struct SendGridNotifier {
    api_key: SecretString,
    from_email: String,
    from_name: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl SendGridNotifier {
    pub fn new(
        api_key: impl Into<String>,
        from_email: impl Into<String>,
        from_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            from_email: from_email.into(),
            from_name: from_name.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn payload(&self, message: &EmailMessage) -> serde_json::Value {
        json!({
            "personalizations": [{ "to": [{ "email": message.to.trim() }] }],
            "from": { "email": self.from_email, "name": self.from_name },
            "subject": message.subject,
            "content": [{ "type": "text/plain", "value": message.body }]
        })
    }
}

#[async_trait]
impl Notifier for SendGridNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        if message.has_no_recipient() {
            tracing::warn!("send called without a recipient; skipping");
            return Ok(());
        }

        let response = self
            .http_client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "SendGrid send failed");
            return Err(classify_status(status, error_text));
        }

        tracing::info!(recipient = %message.to, "Email sent via SendGrid");
        Ok(())
    }
}

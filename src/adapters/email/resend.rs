//! Resend HTTP API notifier.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::ports::{EmailMessage, Notifier, NotifierError};

use super::classify_status;

const DEFAULT_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Notifier backed by the Resend `/emails` endpoint.
pub struct ResendNotifier {
    api_key: SecretString,
    from: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl ResendNotifier {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            from: from.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        if message.has_no_recipient() {
            tracing::warn!("send called without a recipient; skipping");
            return Ok(());
        }

        let body = SendEmailRequest {
            from: &self.from,
            to: [message.to.trim()],
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .http_client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "Resend send failed");
            return Err(classify_status(status, error_text));
        }

        tracing::info!(recipient = %message.to, "Email sent via Resend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::EmailContent;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> EmailMessage {
        EmailMessage::new("user@example.com", EmailContent::new("Hello", "Body text"))
    }

    #[tokio::test]
    async fn posts_message_with_bearer_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .and(body_json(serde_json::json!({
                "from": "Payble <noreply@payble.app>",
                "to": ["user@example.com"],
                "subject": "Hello",
                "text": "Body text"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "em_1"})))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = ResendNotifier::new("re_test", "Payble <noreply@payble.app>").with_base_url(server.uri());

        assert!(notifier.send(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn client_error_is_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid from"))
            .mount(&server)
            .await;

        let notifier = ResendNotifier::new("re_test", "bad").with_base_url(server.uri());

        assert_eq!(
            notifier.send(&message()).await,
            Err(NotifierError::Rejected("invalid from".to_string()))
        );
    }

    #[tokio::test]
    async fn server_error_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let notifier = ResendNotifier::new("re_test", "a@b.com").with_base_url(server.uri());

        assert!(matches!(notifier.send(&message()).await, Err(NotifierError::Transport(_))));
    }

    #[tokio::test]
    async fn empty_recipient_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let notifier = ResendNotifier::new("re_test", "a@b.com").with_base_url(server.uri());
        let message = EmailMessage::new("  ", EmailContent::new("S", "B"));

        assert!(notifier.send(&message).await.is_ok());
    }
}

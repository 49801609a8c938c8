//! Email configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Outbound email provider
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// SMTP relay with STARTTLS
    #[default]
    Smtp,
    /// Resend HTTP API
    Resend,
    /// SendGrid v3 HTTP API
    Sendgrid,
}

/// Email configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,

    /// From email address; SMTP falls back to the SMTP user
    #[serde(default)]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Upper bound on a single send, in seconds
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,

    /// SMTP relay host
    #[serde(default)]
    pub smtp_host: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_user: String,

    #[serde(default)]
    pub smtp_password: String,

    #[serde(default)]
    pub resend_api_key: String,

    #[serde(default)]
    pub sendgrid_api_key: String,
}

impl EmailConfig {
    /// Sender address after the SMTP-user fallback.
    pub fn sender_address(&self) -> &str {
        if self.from_email.is_empty() {
            &self.smtp_user
        } else {
            &self.from_email
        }
    }

    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.sender_address())
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }

    /// Validate email configuration for the selected provider
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.provider {
            EmailProvider::Smtp => {
                if self.smtp_host.is_empty() {
                    return Err(ValidationError::MissingRequired("SMTP_HOST"));
                }
                if self.smtp_user.is_empty() {
                    return Err(ValidationError::MissingRequired("SMTP_USER"));
                }
                if self.smtp_password.is_empty() {
                    return Err(ValidationError::MissingRequired("SMTP_PASSWORD"));
                }
            }
            EmailProvider::Resend => {
                if self.resend_api_key.is_empty() {
                    return Err(ValidationError::MissingRequired("RESEND_API_KEY"));
                }
                if !self.resend_api_key.starts_with("re_") {
                    return Err(ValidationError::InvalidResendKey);
                }
            }
            EmailProvider::Sendgrid => {
                if self.sendgrid_api_key.is_empty() {
                    return Err(ValidationError::MissingRequired("SENDGRID_API_KEY"));
                }
                if !self.sendgrid_api_key.starts_with("SG.") {
                    return Err(ValidationError::InvalidSendGridKey);
                }
            }
        }

        if !self.sender_address().contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if self.send_timeout_secs == 0 || self.send_timeout_secs > 120 {
            return Err(ValidationError::InvalidSendTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            from_email: String::new(),
            from_name: default_from_name(),
            send_timeout_secs: default_send_timeout(),
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_user: String::new(),
            smtp_password: String::new(),
            resend_api_key: String::new(),
            sendgrid_api_key: String::new(),
        }
    }
}

fn default_from_name() -> String {
    "Payble".to_string()
}

fn default_send_timeout() -> u64 {
    10
}

fn default_smtp_port() -> u16 {
    587
}

//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Razorpay)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay key id (public, sent to the checkout client)
    #[serde(default)]
    pub razorpay_key_id: String,

    /// Razorpay key secret; signs checkout results
    #[serde(default)]
    pub razorpay_key_secret: String,

    /// Dedicated webhook secret; falls back to the key secret
    pub razorpay_webhook_secret: Option<String>,

    /// Orders API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl PaymentConfig {
    /// Secret used to verify webhook deliveries.
    pub fn webhook_secret(&self) -> &str {
        self.razorpay_webhook_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.razorpay_key_secret)
    }

    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.razorpay_key_id.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_ID"));
        }
        if self.razorpay_key_secret.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"));
        }
        if !self.razorpay_key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidRazorpayKey);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            razorpay_key_id: String::new(),
            razorpay_key_secret: String::new(),
            razorpay_webhook_secret: None,
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com/v1".to_string()
}

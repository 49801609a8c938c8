//! Razorpay Orders API adapter.
//!
//! Implements the `PaymentGateway` port. Orders are created with automatic
//! capture so a successful checkout settles without a separate capture call.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::new(key_id, key_secret);
//! let adapter = RazorpayOrdersAdapter::new(config);
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::PaymentConfig;
use crate::ports::{CreateOrderRequest, Order, PaymentError, PaymentGateway};

const DEFAULT_BASE_URL: &str = "https://api.razorpay.com/v1";

/// Razorpay API credentials.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Public key id (rzp_test_... or rzp_live_...).
    key_id: String,

    /// Key secret, used as the basic-auth password.
    key_secret: SecretString,

    /// Base URL including the API version.
    api_base_url: String,
}

impl RazorpayConfig {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Credentials and base URL from the `payment` config section.
    pub fn from_app_config(config: &PaymentConfig) -> Self {
        Self::new(&config.razorpay_key_id, &config.razorpay_key_secret)
            .with_base_url(&config.api_base_url)
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct OrderParams<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    payment_capture: u8,
}

/// Razorpay payment gateway adapter.
pub struct RazorpayOrdersAdapter {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayOrdersAdapter {
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayOrdersAdapter {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, PaymentError> {
        let url = format!("{}/orders", self.config.api_base_url);

        let params = OrderParams {
            amount: request.amount_minor,
            currency: &request.currency,
            receipt: &request.receipt,
            payment_capture: 1,
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .json(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "Razorpay create_order failed");
            return Err(match status {
                StatusCode::UNAUTHORIZED => PaymentError::authentication(error_text),
                StatusCode::BAD_REQUEST => PaymentError::invalid_request(error_text),
                _ => PaymentError::provider(format!("Razorpay API error: {}", error_text)),
            });
        }

        let order: Order = response.json().await.map_err(|e| {
            PaymentError::provider(format!("Failed to parse Razorpay response: {}", e))
        })?;

        tracing::info!(
            order_id = %order.id,
            amount = order.amount,
            currency = %order.currency,
            "Razorpay order created"
        );
        Ok(order)
    }

    fn key_id(&self) -> &str {
        &self.config.key_id
    }
}

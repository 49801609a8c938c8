//! Mock payment gateway for testing.
//!
//! Records every order request and returns a synthetic order, or a
//! configured error.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{CreateOrderRequest, Order, PaymentError, PaymentGateway};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new("rzp_test_key");
/// mock.set_error(PaymentError::network("down"));
/// let result = mock.create_order(request).await;
/// ```
#[derive(Clone)]
pub struct MockPaymentGateway {
    key_id: String,
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    requests: Vec<CreateOrderRequest>,
    next_error: Option<PaymentError>,
}

impl MockPaymentGateway {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            inner: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Fail the next `create_order` call with `error`.
    pub fn set_error(&self, error: PaymentError) {
        if let Ok(mut state) = self.inner.lock() {
            state.next_error = Some(error);
        }
    }

    /// Order requests received so far.
    pub fn requests(&self) -> Vec<CreateOrderRequest> {
        self.inner
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new("rzp_test_mock")
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, PaymentError> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| PaymentError::provider("mock state poisoned"))?;

        state.requests.push(request.clone());
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(Order {
            id: format!("order_mock_{}", state.requests.len()),
            amount: request.amount_minor,
            currency: request.currency,
            receipt: Some(request.receipt),
            status: Some("created".to_string()),
            extra: serde_json::Map::new(),
        })
    }

    fn key_id(&self) -> &str {
        &self.key_id
    }
}

//! CreateOrderHandler - opens a checkout order with the payment gateway.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::Timestamp;
use crate::domain::payment::PaymentAmount;
use crate::domain::reminder::ReminderError;
use crate::ports::{CreateOrderRequest, Order, PaymentGateway};

const DEFAULT_CURRENCY: &str = "INR";

/// Command to create a checkout order.
#[derive(Debug, Clone, Default)]
pub struct CreateOrderCommand {
    /// Raw `amount` from the request; a number or numeric string in major units.
    pub amount: Option<Value>,
    pub currency: Option<String>,
    pub receipt: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    pub order: Order,
    /// Public key id for the checkout client.
    pub key_id: String,
}

pub struct CreateOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateOrderHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, ReminderError> {
        let amount = PaymentAmount::from_json(cmd.amount.as_ref())
            .map_err(|_| ReminderError::validation("amount", "Invalid amount"))?;

        let request = CreateOrderRequest {
            amount_minor: amount.to_minor_units(),
            currency: non_blank(cmd.currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            receipt: non_blank(cmd.receipt)
                .unwrap_or_else(|| format!("rcpt_{}", Timestamp::now().as_unix_millis())),
        };

        let order = self.gateway.create_order(request).await.map_err(|e| {
            tracing::error!(error = %e, "Create order failed");
            ReminderError::payment_gateway(e.to_string())
        })?;

        Ok(CreateOrderResult {
            order,
            key_id: self.gateway.key_id().to_string(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

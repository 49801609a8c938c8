//! Razorpay webhook event types.
//!
//! Only the fields the handler reads are modelled; the rest of the payload is
//! kept as raw JSON.

use serde::{Deserialize, Serialize};

/// A webhook delivery from the payment gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayEvent {
    /// Event name, e.g. `payment.captured`.
    #[serde(default)]
    pub event: String,

    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Event names the handler distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEventType {
    PaymentCaptured,
    Other,
}

/// Identifiers of a captured payment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CapturedPayment {
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
}

impl GatewayEvent {
    pub fn event_type(&self) -> GatewayEventType {
        match self.event.as_str() {
            "payment.captured" => GatewayEventType::PaymentCaptured,
            _ => GatewayEventType::Other,
        }
    }

    /// Reads `payload.payment.entity`; `None` if absent or malformed.
    pub fn payment_entity(&self) -> Option<CapturedPayment> {
        let entity = self.payload.get("payment")?.get("entity")?;
        serde_json::from_value(entity.clone()).ok()
    }
}

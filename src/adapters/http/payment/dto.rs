//! HTTP DTOs for payment endpoints.
//!
//! Request field names follow what the checkout widget and web client send:
//! `razorpay_*` for gateway values, camelCase for the rest.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapters::http::reminder::ReminderResponse;
use crate::application::handlers::payment::{
    ConfirmDemoPaymentCommand, CreateOrderCommand, VerifyPaymentCommand,
};
use crate::domain::payment::lenient_number;
use crate::ports::Order;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub receipt: Option<String>,
}

impl From<CreateOrderRequest> for CreateOrderCommand {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            amount: req.amount,
            currency: req.currency,
            receipt: req.receipt,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
    #[serde(default, rename = "reminderId")]
    pub reminder_id: Option<String>,
    #[serde(default, rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(default, rename = "billName")]
    pub bill_name: Option<String>,
    #[serde(default)]
    pub amount: Option<Value>,
}

impl From<VerifyPaymentRequest> for VerifyPaymentCommand {
    fn from(req: VerifyPaymentRequest) -> Self {
        Self {
            order_id: req.razorpay_order_id,
            payment_id: req.razorpay_payment_id,
            signature: req.razorpay_signature,
            reminder_id: req.reminder_id,
            user_email: req.user_email,
            bill_name: req.bill_name,
            amount: req.amount.as_ref().and_then(lenient_number),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoSuccessRequest {
    #[serde(default, rename = "reminderId")]
    pub reminder_id: Option<String>,
    #[serde(default, rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(default, rename = "billName")]
    pub bill_name: Option<String>,
    #[serde(default)]
    pub amount: Option<Value>,
}

impl From<DemoSuccessRequest> for ConfirmDemoPaymentCommand {
    fn from(req: DemoSuccessRequest) -> Self {
        Self {
            reminder_id: req.reminder_id,
            user_email: req.user_email,
            bill_name: req.bill_name,
            amount: req.amount.as_ref().and_then(lenient_number),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: Order,
    /// Public key id for the checkout widget.
    pub key: String,
}

/// Response for a payment that settled a reminder.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentUpdateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated: Option<bool>,
    pub updated: ReminderResponse,
}

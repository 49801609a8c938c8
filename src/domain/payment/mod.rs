//! Payment domain module.
//!
//! Checkout amounts, gateway signature verification and webhook event parsing.

mod amount;
mod gateway_event;
mod signature;
mod webhook_errors;

pub use amount::{lenient_number, PaymentAmount};
pub use gateway_event::{CapturedPayment, GatewayEvent, GatewayEventType};
pub use signature::SignatureVerifier;
pub use webhook_errors::WebhookError;

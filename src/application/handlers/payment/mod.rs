//! Payment handlers.
//!
//! - Checkout order creation
//! - Checkout signature verification
//! - Demo confirmation
//! - Gateway webhook intake

mod confirm_demo_payment;
mod create_order;
mod handle_gateway_webhook;
mod verify_payment;

pub use confirm_demo_payment::{ConfirmDemoPaymentCommand, ConfirmDemoPaymentHandler, ConfirmDemoPaymentResult};
pub use create_order::{CreateOrderCommand, CreateOrderHandler, CreateOrderResult};
pub use handle_gateway_webhook::{HandleGatewayWebhookCommand, HandleGatewayWebhookHandler, WebhookOutcome};
pub use verify_payment::{VerifyPaymentCommand, VerifyPaymentHandler, VerifyPaymentResult};

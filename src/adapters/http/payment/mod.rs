//! HTTP adapter for payment endpoints.
//!
//! - `POST /api/payments/create-order` - Open a checkout order
//! - `POST /api/payments/verify` - Verify a checkout result and settle the reminder
//! - `POST /api/payments/demo-success` - Mark a reminder paid without the gateway
//! - `POST /api/payments/webhook` - Gateway webhook intake (signature verified)

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateOrderRequest, CreateOrderResponse, DemoSuccessRequest, PaymentUpdateResponse, VerifyPaymentRequest,
};
pub use routes::payment_routes;

/// Header carrying the webhook body signature.
pub const SIGNATURE_HEADER: &str = "X-Razorpay-Signature";

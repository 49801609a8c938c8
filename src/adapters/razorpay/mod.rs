//! Razorpay payment gateway adapters.
//!
//! - `RazorpayOrdersAdapter` - production implementation over the Orders API
//! - `MockPaymentGateway` - configurable mock for testing
//!
//! Checkout and webhook signatures are verified in `domain::payment`, not here.

mod mock_gateway;
mod orders_adapter;

pub use mock_gateway::MockPaymentGateway;
pub use orders_adapter::{RazorpayConfig, RazorpayOrdersAdapter};

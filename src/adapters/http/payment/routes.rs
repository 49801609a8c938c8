//! Axum router configuration for payment endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{create_order, demo_success, handle_webhook, verify_payment};

/// Create the payment router.
///
/// # Routes
/// - `POST /create-order` - Open a checkout order
/// - `POST /verify` - Verify a checkout result
/// - `POST /demo-success` - Mark a reminder paid without the gateway
/// - `POST /webhook` - Gateway webhook intake (no auth, signature verified)
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/verify", post(verify_payment))
        .route("/demo-success", post(demo_success))
        .route("/webhook", post(handle_webhook))
}

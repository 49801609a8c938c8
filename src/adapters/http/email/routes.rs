//! Axum router configuration for email endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{send_due_reminders, send_test_email};

/// Create the email router.
///
/// # Routes
/// - `POST /send-due-reminders` - Run the due-reminder sweep
/// - `POST /test` - Send a test message
pub fn email_routes() -> Router<AppState> {
    Router::new()
        .route("/send-due-reminders", post(send_due_reminders))
        .route("/test", post(send_test_email))
}

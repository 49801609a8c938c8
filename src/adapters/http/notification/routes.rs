//! Axum router configuration for notification endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::get_notifications;

/// Create the notification router.
///
/// # Routes
/// - `GET /` - Notification feed for the caller
pub fn notification_routes() -> Router<AppState> {
    Router::new().route("/", get(get_notifications))
}

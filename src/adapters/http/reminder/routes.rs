//! Axum router configuration for reminder endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{create_reminder, list_reminders};

/// Create the reminder API router.
///
/// # Routes
/// - `GET /` - List the caller's reminders
/// - `POST /` - Create a reminder
pub fn reminder_routes() -> Router<AppState> {
    Router::new().route("/", get(list_reminders).post(create_reminder))
}

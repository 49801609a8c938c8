//! HTTP handlers for the notification feed.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::notification::GetNotificationsQuery;
use crate::domain::notification::Notification;

#[derive(Debug, Clone, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
}

/// GET /api/notifications - Notification feed for the caller
pub async fn get_notifications(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    let query = GetNotificationsQuery { user_id: user.id };

    match state.get_notifications_handler().handle(query).await {
        Ok(result) => Json(NotificationListResponse {
            notifications: result.notifications,
        })
        .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to fetch notifications" })),
        )
            .into_response(),
    }
}

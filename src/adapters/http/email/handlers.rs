//! HTTP handlers for email endpoints.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::response::IntoResponse;
use serde_json::json;

use crate::adapters::http::error::ReminderApiError;
use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::state::AppState;
use crate::application::handlers::email::{SendDueRemindersCommand, SendTestEmailCommand};

use super::dto::{SendDueRemindersRequest, SendDueRemindersResponse, SendTestEmailRequest};

/// POST /api/emails/send-due-reminders - Email every unpaid bill due soon
pub async fn send_due_reminders(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ReminderApiError> {
    let req = SendDueRemindersRequest::from_body(&body);
    let cmd = SendDueRemindersCommand {
        days_ahead: req.days_ahead(),
    };

    let result = state
        .send_due_reminders_handler()
        .handle(cmd)
        .await
        .map_err(|e| ReminderApiError::from(e).with_failure_message("Failed to send due reminders"))?;

    let message = (result.candidates == 0).then(|| "No reminders due soon".to_string());

    Ok(Json(SendDueRemindersResponse {
        success: true,
        sent: result.sent,
        message,
    }))
}

/// POST /api/emails/test - Send a fixed test message
pub async fn send_test_email(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SendTestEmailRequest>,
) -> Result<impl IntoResponse, ReminderApiError> {
    let result = state
        .send_test_email_handler()
        .handle(SendTestEmailCommand { to: req.to })
        .await
        .map_err(|e| ReminderApiError::from(e).with_failure_message("Failed to send test email"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Test email sent",
        "to": result.recipient,
    })))
}

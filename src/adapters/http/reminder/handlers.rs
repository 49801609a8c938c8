//! HTTP handlers for reminder endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ReminderApiError;
use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::reminder::{CreateReminderCommand, ListRemindersQuery};
use crate::domain::reminder::ReminderError;

use super::dto::{parse_due_date, CreateReminderRequest, ReminderListResponse, ReminderResponse};

/// POST /api/reminders - Create a reminder for the caller
pub async fn create_reminder(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    JsonBody(req): JsonBody<CreateReminderRequest>,
) -> Result<impl IntoResponse, ReminderApiError> {
    let due_date = req
        .due_date
        .as_deref()
        .ok_or_else(|| ReminderError::missing_fields("bill_name and due_date are required"))
        .and_then(|value| parse_due_date(value).map_err(ReminderError::from))?;

    let cmd = CreateReminderCommand {
        owner: user,
        bill_name: req.bill_name,
        due_date,
        amount: req.amount,
        priority: req.priority,
        frequency: req.frequency,
        user_email: req.user_email,
    };

    let result = state.create_reminder_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(ReminderResponse::from(result.reminder))))
}

/// GET /api/reminders - List the caller's reminders by due date
pub async fn list_reminders(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ReminderApiError> {
    let result = state
        .list_reminders_handler()
        .handle(ListRemindersQuery { user_id: user.id })
        .await?;

    Ok(Json(ReminderListResponse {
        reminders: result.reminders.into_iter().map(ReminderResponse::from).collect(),
    }))
}

//! HTTP adapter for reminder endpoints.
//!
//! - `POST /api/reminders` - Create a reminder for the caller
//! - `GET /api/reminders` - List the caller's reminders

mod dto;
mod handlers;
mod routes;

pub use dto::{parse_due_date, CreateReminderRequest, ReminderListResponse, ReminderResponse};
pub use routes::reminder_routes;

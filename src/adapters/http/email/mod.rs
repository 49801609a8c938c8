//! HTTP adapter for email endpoints.
//!
//! - `POST /api/emails/send-due-reminders` - Run the due-reminder sweep
//! - `POST /api/emails/test` - Send a test message

mod dto;
mod handlers;
mod routes;

pub use dto::{SendDueRemindersRequest, SendDueRemindersResponse, SendTestEmailRequest};
pub use routes::email_routes;

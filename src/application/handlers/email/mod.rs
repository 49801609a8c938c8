//! Email handlers.
//!
//! - Due-reminder sweep
//! - Test email

mod send_due_reminders;
mod send_test_email;

pub use send_due_reminders::{SendDueRemindersCommand, SendDueRemindersHandler, SendDueRemindersResult};
pub use send_test_email::{SendTestEmailCommand, SendTestEmailHandler, SendTestEmailResult};

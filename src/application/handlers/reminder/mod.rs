//! Reminder handlers.
//!
//! ## Commands
//! - Creating a reminder for the caller
//!
//! ## Queries
//! - Listing the caller's reminders

mod create_reminder;
mod list_reminders;

pub use create_reminder::{CreateReminderCommand, CreateReminderHandler, CreateReminderResult};
pub use list_reminders::{ListRemindersHandler, ListRemindersQuery, ListRemindersResult};

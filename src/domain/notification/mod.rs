//! Notification domain module.
//!
//! In-app notification derivation, the due-reminder sweep window and the
//! plain-text email templates.

mod deriver;
mod entry;
mod sweep;
pub mod templates;

pub use deriver::{days_until, derive_notifications, DUE_HORIZON_DAYS, PAYMENT_NOTIFICATION_LIMIT};
pub use entry::{Notification, NotificationType};
pub use sweep::{SweepWindow, DEFAULT_DAYS_AHEAD};
pub use templates::EmailContent;

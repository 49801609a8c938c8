//! Reminder reader port (read side / queries).
//!
//! Range and filter queries used by the notification feed, the due-reminder
//! sweep and the reminder list.

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::notification::SweepWindow;
use crate::domain::reminder::Reminder;
use async_trait::async_trait;

/// Reader port for reminder queries.
#[async_trait]
pub trait ReminderReader: Send + Sync {
    /// All reminders owned by `user_id`, ascending by due date.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Reminder>, DomainError>;

    /// Reminders that can appear in the user's notification feed.
    ///
    /// Returns the union of unpaid reminders due on or before `due_by` and
    /// reminders with a recorded payment outcome. Callers apply ordering and
    /// limits.
    async fn find_notification_candidates(
        &self,
        user_id: &UserId,
        due_by: Timestamp,
    ) -> Result<Vec<Reminder>, DomainError>;

    /// Unpaid reminders with an email on file, due inside `window`, across all
    /// users.
    async fn find_sweep_candidates(&self, window: &SweepWindow) -> Result<Vec<Reminder>, DomainError>;
}

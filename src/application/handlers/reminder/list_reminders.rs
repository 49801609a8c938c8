//! ListRemindersHandler - Query handler for the caller's reminders.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::reminder::{Reminder, ReminderError};
use crate::ports::ReminderReader;

#[derive(Debug, Clone)]
pub struct ListRemindersQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct ListRemindersResult {
    /// Ascending by due date.
    pub reminders: Vec<Reminder>,
}

pub struct ListRemindersHandler {
    reader: Arc<dyn ReminderReader>,
}

impl ListRemindersHandler {
    pub fn new(reader: Arc<dyn ReminderReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListRemindersQuery) -> Result<ListRemindersResult, ReminderError> {
        let reminders = self.reader.list_for_user(&query.user_id).await?;
        Ok(ListRemindersResult { reminders })
    }
}

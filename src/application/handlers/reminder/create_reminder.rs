//! CreateReminderHandler - Command handler for adding a bill reminder.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, ReminderId, Timestamp};
use crate::domain::reminder::{Frequency, Priority, Reminder, ReminderError};
use crate::ports::ReminderRepository;

/// Command to create a reminder for the calling user.
#[derive(Debug, Clone)]
pub struct CreateReminderCommand {
    pub owner: AuthenticatedUser,
    pub bill_name: String,
    pub due_date: Timestamp,
    pub amount: Option<f64>,
    pub priority: Option<Priority>,
    pub frequency: Option<Frequency>,
    /// Overrides the email carried by the caller's identity.
    pub user_email: Option<String>,
}

/// Result of successful reminder creation.
#[derive(Debug, Clone)]
pub struct CreateReminderResult {
    pub reminder: Reminder,
}

/// Handler for creating reminders.
pub struct CreateReminderHandler {
    repository: Arc<dyn ReminderRepository>,
}

impl CreateReminderHandler {
    pub fn new(repository: Arc<dyn ReminderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateReminderCommand) -> Result<CreateReminderResult, ReminderError> {
        let email = cmd
            .user_email
            .filter(|e| !e.trim().is_empty())
            .or(cmd.owner.email);

        let reminder = Reminder::create(
            ReminderId::new(),
            cmd.owner.id,
            cmd.bill_name,
            cmd.due_date,
            Timestamp::now(),
        )?
        .with_amount(cmd.amount)?
        .with_email(email)
        .with_priority(cmd.priority.unwrap_or_default())
        .with_frequency(cmd.frequency.unwrap_or_default());

        self.repository.save(&reminder).await?;

        tracing::info!(
            reminder_id = %reminder.id,
            user_id = %reminder.user_id,
            due_date = %reminder.due_date.date(),
            "Reminder created"
        );

        Ok(CreateReminderResult { reminder })
    }
}

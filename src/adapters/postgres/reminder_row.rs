//! Row mapping shared by the reminder repository and reader.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ReminderId, Timestamp, UserId};
use crate::domain::reminder::{Frequency, PaymentStatus, Priority, Reminder};

/// Column list selected by every reminder query.
pub(super) const REMINDER_COLUMNS: &str = "id, user_id, user_email, bill_name, amount, due_date, \
     priority, frequency, is_paid, paid_at, payment_status, created_at";

/// Database row representation of a reminder.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ReminderRow {
    id: Uuid,
    user_id: String,
    user_email: Option<String>,
    bill_name: String,
    amount: Option<f64>,
    due_date: DateTime<Utc>,
    priority: String,
    frequency: String,
    is_paid: bool,
    paid_at: Option<DateTime<Utc>>,
    payment_status: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReminderRow> for Reminder {
    type Error = DomainError;

    fn try_from(row: ReminderRow) -> Result<Self, Self::Error> {
        let priority: Priority = row.priority.parse().map_err(corrupt)?;
        let frequency: Frequency = row.frequency.parse().map_err(corrupt)?;
        let payment_status = row
            .payment_status
            .as_deref()
            .map(str::parse::<PaymentStatus>)
            .transpose()
            .map_err(corrupt)?;

        Ok(Reminder {
            id: ReminderId::from_uuid(row.id),
            user_id: UserId::new(row.user_id).map_err(corrupt)?,
            user_email: row.user_email,
            bill_name: row.bill_name,
            amount: row.amount,
            due_date: Timestamp::from_datetime(row.due_date),
            priority,
            frequency,
            is_paid: row.is_paid,
            paid_at: row.paid_at.map(Timestamp::from_datetime),
            payment_status,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn corrupt(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Invalid reminder row: {}", err))
}

pub(super) fn rows_to_reminders(rows: Vec<ReminderRow>) -> Result<Vec<Reminder>, DomainError> {
    rows.into_iter().map(Reminder::try_from).collect()
}

pub(super) fn query_failed(operation: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %err, "Reminder query failed");
    DomainError::database(format!("Failed to {}: {}", operation, err))
}

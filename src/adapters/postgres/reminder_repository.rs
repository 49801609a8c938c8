//! PostgreSQL implementation of ReminderRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ReminderId};
use crate::domain::reminder::{PaymentOutcome, Reminder};
use crate::ports::ReminderRepository;

use super::reminder_row::{query_failed, ReminderRow, REMINDER_COLUMNS};

/// PostgreSQL implementation of the ReminderRepository port.
pub struct PostgresReminderRepository {
    pool: PgPool,
}

impl PostgresReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReminderRepository for PostgresReminderRepository {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reminders (
                id, user_id, user_email, bill_name, amount, due_date,
                priority, frequency, is_paid, paid_at, payment_status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                user_email = EXCLUDED.user_email,
                bill_name = EXCLUDED.bill_name,
                amount = EXCLUDED.amount,
                due_date = EXCLUDED.due_date,
                priority = EXCLUDED.priority,
                frequency = EXCLUDED.frequency,
                is_paid = EXCLUDED.is_paid,
                paid_at = EXCLUDED.paid_at,
                payment_status = EXCLUDED.payment_status
            "#,
        )
        .bind(reminder.id.as_uuid())
        .bind(reminder.user_id.as_str())
        .bind(&reminder.user_email)
        .bind(&reminder.bill_name)
        .bind(reminder.amount)
        .bind(reminder.due_date.as_datetime())
        .bind(reminder.priority.as_str())
        .bind(reminder.frequency.as_str())
        .bind(reminder.is_paid)
        .bind(reminder.paid_at.as_ref().map(|t| *t.as_datetime()))
        .bind(reminder.payment_status.map(|s| s.as_str()))
        .bind(reminder.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("save reminder", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>, DomainError> {
        let sql = format!("SELECT {} FROM reminders WHERE id = $1", REMINDER_COLUMNS);

        let row: Option<ReminderRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("find reminder", e))?;

        row.map(Reminder::try_from).transpose()
    }

    async fn record_payment_outcome(
        &self,
        id: &ReminderId,
        outcome: PaymentOutcome,
    ) -> Result<Option<Reminder>, DomainError> {
        // Single-statement transition; concurrent callers resolve last-write-wins.
        let row: Option<ReminderRow> = match outcome {
            PaymentOutcome::Succeeded { paid_at } => {
                let sql = format!(
                    "UPDATE reminders SET is_paid = TRUE, paid_at = $2, payment_status = 'success' \
                     WHERE id = $1 RETURNING {}",
                    REMINDER_COLUMNS
                );
                sqlx::query_as::<_, ReminderRow>(&sql)
                    .bind(id.as_uuid())
                    .bind(paid_at.as_datetime())
                    .fetch_optional(&self.pool)
                    .await
            }
            PaymentOutcome::Failed => {
                let sql = format!(
                    "UPDATE reminders SET payment_status = 'failed' WHERE id = $1 RETURNING {}",
                    REMINDER_COLUMNS
                );
                sqlx::query_as::<_, ReminderRow>(&sql)
                    .bind(id.as_uuid())
                    .fetch_optional(&self.pool)
                    .await
            }
        }
        .map_err(|e| query_failed("record payment outcome", e))?;

        row.map(Reminder::try_from).transpose()
    }
}

//! PostgreSQL implementation of ReminderReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::notification::SweepWindow;
use crate::domain::reminder::Reminder;
use crate::ports::ReminderReader;

use super::reminder_row::{query_failed, rows_to_reminders, ReminderRow, REMINDER_COLUMNS};

/// PostgreSQL implementation of the ReminderReader port.
pub struct PostgresReminderReader {
    pool: PgPool,
}

impl PostgresReminderReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReminderReader for PostgresReminderReader {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Reminder>, DomainError> {
        let sql = format!(
            "SELECT {} FROM reminders WHERE user_id = $1 ORDER BY due_date ASC",
            REMINDER_COLUMNS
        );

        let rows: Vec<ReminderRow> = sqlx::query_as(&sql)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("list reminders", e))?;

        rows_to_reminders(rows)
    }

    async fn find_notification_candidates(
        &self,
        user_id: &UserId,
        due_by: Timestamp,
    ) -> Result<Vec<Reminder>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM reminders
            WHERE user_id = $1
              AND ((is_paid = FALSE AND due_date <= $2) OR payment_status IS NOT NULL)
            ORDER BY due_date ASC
            "#,
            REMINDER_COLUMNS
        );

        let rows: Vec<ReminderRow> = sqlx::query_as(&sql)
            .bind(user_id.as_str())
            .bind(due_by.as_datetime())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("find notification candidates", e))?;

        rows_to_reminders(rows)
    }

    async fn find_sweep_candidates(&self, window: &SweepWindow) -> Result<Vec<Reminder>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM reminders
            WHERE is_paid = FALSE
              AND user_email IS NOT NULL
              AND btrim(user_email) <> ''
              AND due_date >= $1
              AND due_date <= $2
            ORDER BY due_date ASC
            "#,
            REMINDER_COLUMNS
        );

        let rows: Vec<ReminderRow> = sqlx::query_as(&sql)
            .bind(window.start.as_datetime())
            .bind(window.end.as_datetime())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("find sweep candidates", e))?;

        rows_to_reminders(rows)
    }
}

//! SendDueRemindersHandler - Command handler for the due-reminder sweep.
//!
//! Emails every unpaid reminder with an address on file whose due date falls
//! in `[start of today, start of today + days_ahead]`. One recipient's failure
//! never stops the others.

use std::sync::Arc;

use chrono::{Local, TimeZone};

use crate::domain::foundation::Timestamp;
use crate::domain::notification::{templates, SweepWindow, DEFAULT_DAYS_AHEAD};
use crate::domain::reminder::ReminderError;
use crate::ports::{EmailMessage, Notifier, ReminderReader};

#[derive(Debug, Clone, Default)]
pub struct SendDueRemindersCommand {
    /// Horizon in days; `DEFAULT_DAYS_AHEAD` when absent.
    pub days_ahead: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendDueRemindersResult {
    /// Reminders selected by the window.
    pub candidates: usize,
    /// Emails the notifier accepted.
    pub sent: usize,
}

pub struct SendDueRemindersHandler {
    reader: Arc<dyn ReminderReader>,
    notifier: Arc<dyn Notifier>,
}

impl SendDueRemindersHandler {
    pub fn new(reader: Arc<dyn ReminderReader>, notifier: Arc<dyn Notifier>) -> Self {
        Self { reader, notifier }
    }

    /// Runs the sweep anchored on the server's local calendar day.
    pub async fn handle(&self, cmd: SendDueRemindersCommand) -> Result<SendDueRemindersResult, ReminderError> {
        self.handle_at(cmd, Timestamp::now(), &Local).await
    }

    /// Runs the sweep as of `now` in `tz`.
    pub async fn handle_at<Tz>(
        &self,
        cmd: SendDueRemindersCommand,
        now: Timestamp,
        tz: &Tz,
    ) -> Result<SendDueRemindersResult, ReminderError>
    where
        Tz: TimeZone + Sync,
    {
        let days_ahead = cmd.days_ahead.unwrap_or(DEFAULT_DAYS_AHEAD);
        let window = SweepWindow::starting_today(now, tz, days_ahead);

        let reminders = self.reader.find_sweep_candidates(&window).await?;

        tracing::info!(
            count = reminders.len(),
            window_start = %window.start.as_datetime(),
            window_end = %window.end.as_datetime(),
            "Found due reminders"
        );

        let mut sent = 0;
        for reminder in &reminders {
            let Some(recipient) = reminder.recipient() else {
                tracing::warn!(reminder_id = %reminder.id, "Reminder has no user_email; skipping");
                continue;
            };

            let content = templates::due_reminder(
                &reminder.bill_name,
                reminder.due_date.date_in(tz),
                reminder.amount,
            );

            match self.notifier.send(&EmailMessage::new(recipient, content)).await {
                Ok(()) => {
                    tracing::info!(
                        reminder_id = %reminder.id,
                        recipient,
                        bill_name = %reminder.bill_name,
                        "Reminder email sent"
                    );
                    sent += 1;
                }
                Err(e) => {
                    tracing::error!(
                        reminder_id = %reminder.id,
                        recipient,
                        error = %e,
                        "Failed to send reminder email"
                    );
                }
            }
        }

        Ok(SendDueRemindersResult {
            candidates: reminders.len(),
            sent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingNotifier;
    use crate::adapters::memory::InMemoryReminderStore;
    use crate::domain::foundation::{ReminderId, UserId};
    use crate::domain::reminder::{PaymentOutcome, Reminder};
    use chrono::{NaiveDate, Utc};

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn now() -> Timestamp {
        Timestamp::from_datetime(day(2024, 3, 10).as_datetime().to_owned() + chrono::Duration::hours(15))
    }

    fn reminder(name: &str, due: Timestamp, email: Option<&str>) -> Reminder {
        Reminder::create(ReminderId::new(), UserId::new("user-1").unwrap(), name, due, day(2024, 1, 1))
            .unwrap()
            .with_email(email.map(String::from))
    }

    async fn run(
        reminders: Vec<Reminder>,
        notifier: RecordingNotifier,
        days_ahead: Option<i64>,
    ) -> SendDueRemindersResult {
        let store = InMemoryReminderStore::with_reminders(reminders).await;
        let handler = SendDueRemindersHandler::new(Arc::new(store), Arc::new(notifier));
        handler
            .handle_at(SendDueRemindersCommand { days_ahead }, now(), &Utc)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn window_is_inclusive_of_last_day() {
        let notifier = RecordingNotifier::new();
        let result = run(
            vec![
                reminder("Today", day(2024, 3, 10), Some("a@example.com")),
                reminder("Edge", day(2024, 3, 17), Some("b@example.com")),
                reminder("Beyond", day(2024, 3, 18), Some("c@example.com")),
                reminder("Yesterday", day(2024, 3, 9), Some("d@example.com")),
            ],
            notifier.clone(),
            Some(7),
        )
        .await;

        assert_eq!(result, SendDueRemindersResult { candidates: 2, sent: 2 });
        let recipients: Vec<_> = notifier.sent().await.into_iter().map(|m| m.to).collect();
        assert_eq!(recipients, vec!["a@example.com", "b@example.com"]);
    }

    #[tokio::test]
    async fn paid_and_addressless_reminders_are_skipped() {
        let mut paid = reminder("Paid", day(2024, 3, 12), Some("paid@example.com"));
        paid.apply(PaymentOutcome::Succeeded { paid_at: day(2024, 3, 9) });

        let notifier = RecordingNotifier::new();
        let result = run(
            vec![paid, reminder("No email", day(2024, 3, 12), None)],
            notifier.clone(),
            Some(7),
        )
        .await;

        assert_eq!(result, SendDueRemindersResult { candidates: 0, sent: 0 });
        assert!(notifier.sent().await.is_empty());
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_sweep() {
        let notifier = RecordingNotifier::new().failing_for("broken@example.com");
        let result = run(
            vec![
                reminder("First", day(2024, 3, 11), Some("broken@example.com")),
                reminder("Second", day(2024, 3, 12), Some("ok@example.com")),
            ],
            notifier.clone(),
            Some(7),
        )
        .await;

        assert_eq!(result, SendDueRemindersResult { candidates: 2, sent: 1 });
        assert_eq!(notifier.sent_to("ok@example.com").await.len(), 1);
    }

    #[tokio::test]
    async fn default_horizon_is_thirty_days() {
        let notifier = RecordingNotifier::new();
        let result = run(
            vec![
                reminder("Day 30", day(2024, 4, 9), Some("a@example.com")),
                reminder("Day 31", day(2024, 4, 10), Some("b@example.com")),
            ],
            notifier,
            None,
        )
        .await;

        assert_eq!(result.sent, 1);
    }

    #[tokio::test]
    async fn email_uses_reminder_template() {
        let notifier = RecordingNotifier::new();
        run(
            vec![reminder("Electricity", day(2024, 3, 12), Some("a@example.com")).with_amount(Some(1450.0)).unwrap()],
            notifier.clone(),
            Some(7),
        )
        .await;

        let sent = notifier.sent().await;
        assert_eq!(sent[0].subject, "Reminder: Electricity is due soon");
        assert!(sent[0].body.contains("is due on 12 Mar 2024"));
        assert!(sent[0].body.contains("Amount: ₹1450."));
    }

    #[tokio::test]
    async fn empty_window_is_success_with_zero_sent() {
        let result = run(vec![], RecordingNotifier::new(), Some(7)).await;

        assert_eq!(result, SendDueRemindersResult { candidates: 0, sent: 0 });
    }
}

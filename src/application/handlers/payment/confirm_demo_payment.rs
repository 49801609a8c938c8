//! ConfirmDemoPaymentHandler - marks a reminder paid without the gateway.

use std::sync::Arc;

use crate::domain::foundation::{ReminderId, Timestamp};
use crate::domain::notification::templates;
use crate::domain::reminder::{PaymentOutcome, Reminder, ReminderError};
use crate::ports::{EmailMessage, Notifier, ReminderRepository};

#[derive(Debug, Clone, Default)]
pub struct ConfirmDemoPaymentCommand {
    pub reminder_id: Option<String>,
    pub user_email: Option<String>,
    pub bill_name: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ConfirmDemoPaymentResult {
    pub reminder: Reminder,
}

pub struct ConfirmDemoPaymentHandler {
    repository: Arc<dyn ReminderRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ConfirmDemoPaymentHandler {
    pub fn new(repository: Arc<dyn ReminderRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { repository, notifier }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmDemoPaymentCommand,
    ) -> Result<ConfirmDemoPaymentResult, ReminderError> {
        let (Some(reminder_id), Some(recipient)) = (present(&cmd.reminder_id), present(&cmd.user_email)) else {
            return Err(ReminderError::missing_fields("reminderId and userEmail are required"));
        };
        let reminder_id = ReminderId::parse("reminderId", reminder_id)?;

        let reminder = self
            .repository
            .record_payment_outcome(
                &reminder_id,
                PaymentOutcome::Succeeded {
                    paid_at: Timestamp::now(),
                },
            )
            .await?
            .ok_or(ReminderError::NotFound(reminder_id))?;

        tracing::info!(%reminder_id, "Demo payment recorded");

        let content = templates::demo_payment_succeeded(
            present(&cmd.bill_name).or(Some(reminder.bill_name.as_str())),
            cmd.amount.or(reminder.amount),
        );
        if let Err(e) = self.notifier.send(&EmailMessage::new(recipient, content)).await {
            tracing::warn!(%reminder_id, recipient, error = %e, "Demo payment email failed");
        }

        Ok(ConfirmDemoPaymentResult { reminder })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingNotifier;
    use crate::adapters::memory::InMemoryReminderStore;
    use crate::domain::foundation::UserId;
    use crate::domain::reminder::PaymentStatus;

    async fn setup(notifier: RecordingNotifier) -> (ConfirmDemoPaymentHandler, Arc<InMemoryReminderStore>, Reminder) {
        let now = Timestamp::now();
        let reminder = Reminder::create(ReminderId::new(), UserId::new("user-1").unwrap(), "Water", now, now).unwrap();
        let store = Arc::new(InMemoryReminderStore::with_reminders([reminder.clone()]).await);
        let handler = ConfirmDemoPaymentHandler::new(store.clone(), Arc::new(notifier));
        (handler, store, reminder)
    }

    fn command(reminder_id: ReminderId) -> ConfirmDemoPaymentCommand {
        ConfirmDemoPaymentCommand {
            reminder_id: Some(reminder_id.to_string()),
            user_email: Some("demo@example.com".to_string()),
            bill_name: Some("Water".to_string()),
            amount: Some(300.0),
        }
    }

    #[tokio::test]
    async fn marks_reminder_paid_and_sends_confirmation() {
        let notifier = RecordingNotifier::new();
        let (handler, store, reminder) = setup(notifier.clone()).await;

        let result = handler.handle(command(reminder.id)).await.unwrap();

        assert!(result.reminder.is_paid);
        assert_eq!(result.reminder.payment_status, Some(PaymentStatus::Success));
        assert!(store.get(&reminder.id).await.unwrap().is_paid);

        let sent = notifier.sent_to("demo@example.com").await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].body.contains("\"Water\" of ₹300 was marked as successful"));
    }

    #[tokio::test]
    async fn confirmation_falls_back_to_stored_bill() {
        let now = Timestamp::now();
        let reminder = Reminder::create(ReminderId::new(), UserId::new("user-1").unwrap(), "Electricity", now, now)
            .unwrap()
            .with_amount(Some(1200.0))
            .unwrap();
        let store = Arc::new(InMemoryReminderStore::with_reminders([reminder.clone()]).await);
        let notifier = RecordingNotifier::new();
        let handler = ConfirmDemoPaymentHandler::new(store, Arc::new(notifier.clone()));

        handler
            .handle(ConfirmDemoPaymentCommand {
                bill_name: None,
                amount: None,
                ..command(reminder.id)
            })
            .await
            .unwrap();

        let sent = notifier.sent_to("demo@example.com").await;
        assert_eq!(
            sent[0].body,
            "Your payment for \"Electricity\" of ₹1200 was marked as successful. Thank you!"
        );
    }

    #[tokio::test]
    async fn requires_reminder_id_and_email() {
        let (handler, _, reminder) = setup(RecordingNotifier::new()).await;

        let err = handler
            .handle(ConfirmDemoPaymentCommand {
                user_email: None,
                ..command(reminder.id)
            })
            .await
            .unwrap_err();

        assert_eq!(err.message(), "reminderId and userEmail are required");
    }

    #[tokio::test]
    async fn unknown_reminder_is_not_found_and_sends_nothing() {
        let notifier = RecordingNotifier::new();
        let (handler, _, _) = setup(notifier.clone()).await;

        let err = handler.handle(command(ReminderId::new())).await.unwrap_err();

        assert!(matches!(err, ReminderError::NotFound(_)));
        assert!(notifier.sent().await.is_empty());
    }

    #[tokio::test]
    async fn email_failure_still_succeeds() {
        let (handler, _, reminder) = setup(RecordingNotifier::new().failing_for("demo@example.com")).await;

        let result = handler.handle(command(reminder.id)).await.unwrap();

        assert!(result.reminder.is_paid);
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure_error() {
        let (handler, store, reminder) = setup(RecordingNotifier::new()).await;
        store.fail_writes();

        let err = handler.handle(command(reminder.id)).await.unwrap_err();

        assert!(matches!(err, ReminderError::Infrastructure(_)));
    }
}

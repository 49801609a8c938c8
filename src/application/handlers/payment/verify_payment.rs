//! VerifyPaymentHandler - settles a reminder from a signed checkout result.
//!
//! The checkout client reports `order_id`, `payment_id` and the gateway's
//! signature over `order_id|payment_id`. A matching signature marks the
//! reminder paid and awaits a confirmation email. A mismatch records the
//! failure, fires a failure email in the background and returns
//! `InvalidSignature`.

use std::sync::Arc;

use crate::domain::foundation::{ReminderId, Timestamp};
use crate::domain::notification::templates;
use crate::domain::payment::SignatureVerifier;
use crate::domain::reminder::{PaymentOutcome, Reminder, ReminderError};
use crate::ports::{EmailMessage, Notifier, ReminderRepository};

/// Command carrying a checkout result.
#[derive(Debug, Clone, Default)]
pub struct VerifyPaymentCommand {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
    pub reminder_id: Option<String>,
    /// Where to send the outcome email.
    pub user_email: Option<String>,
    /// Display overrides for the outcome email.
    pub bill_name: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct VerifyPaymentResult {
    pub reminder: Reminder,
}

pub struct VerifyPaymentHandler {
    repository: Arc<dyn ReminderRepository>,
    notifier: Arc<dyn Notifier>,
    verifier: SignatureVerifier,
}

impl VerifyPaymentHandler {
    pub fn new(
        repository: Arc<dyn ReminderRepository>,
        notifier: Arc<dyn Notifier>,
        verifier: SignatureVerifier,
    ) -> Self {
        Self {
            repository,
            notifier,
            verifier,
        }
    }

    pub async fn handle(&self, cmd: VerifyPaymentCommand) -> Result<VerifyPaymentResult, ReminderError> {
        let (Some(order_id), Some(payment_id), Some(signature), Some(reminder_id)) = (
            supplied(&cmd.order_id),
            supplied(&cmd.payment_id),
            supplied(&cmd.signature),
            present(&cmd.reminder_id),
        ) else {
            return Err(ReminderError::missing_fields("Missing required fields"));
        };
        let reminder_id = ReminderId::parse("reminderId", reminder_id)?;

        tracing::info!(%reminder_id, order_id, payment_id, "Verifying payment");

        if !self.verifier.verify_payment(order_id, payment_id, signature) {
            tracing::warn!(%reminder_id, order_id, payment_id, "Invalid payment signature");
            self.record_failure(reminder_id, &cmd).await;
            return Err(ReminderError::InvalidSignature);
        }

        let paid_at = Timestamp::now();
        let reminder = self
            .repository
            .record_payment_outcome(&reminder_id, PaymentOutcome::Succeeded { paid_at })
            .await?
            .ok_or_else(|| {
                tracing::warn!(%reminder_id, "Signature valid but reminder not found");
                ReminderError::not_found(reminder_id)
            })?;

        tracing::info!(%reminder_id, order_id, payment_id, "Payment verified; reminder marked paid");

        let recipient = present(&cmd.user_email).or_else(|| reminder.recipient());
        if let Some(recipient) = recipient {
            let content = templates::payment_succeeded(
                present(&cmd.bill_name).or(Some(reminder.bill_name.as_str())),
                cmd.amount.or(reminder.amount),
            );
            match self.notifier.send(&EmailMessage::new(recipient, content)).await {
                Ok(()) => tracing::info!(%reminder_id, recipient, "Payment success email sent"),
                Err(e) => tracing::warn!(%reminder_id, recipient, error = %e, "Payment success email failed"),
            }
        }

        Ok(VerifyPaymentResult { reminder })
    }

    /// Marks the reminder failed and emails the caller without waiting.
    async fn record_failure(&self, reminder_id: ReminderId, cmd: &VerifyPaymentCommand) {
        match self
            .repository
            .record_payment_outcome(&reminder_id, PaymentOutcome::Failed)
            .await
        {
            Ok(Some(_)) => tracing::info!(%reminder_id, "Reminder marked payment_status=failed"),
            Ok(None) => tracing::warn!(%reminder_id, "Could not mark payment failed: reminder not found"),
            Err(e) => tracing::warn!(%reminder_id, error = %e, "Could not mark payment failed"),
        }

        let Some(recipient) = present(&cmd.user_email) else {
            return;
        };
        let message = EmailMessage::new(
            recipient,
            templates::payment_failed(present(&cmd.bill_name), cmd.amount),
        );
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&message).await {
                tracing::warn!(recipient = %message.to, error = %e, "Payment failed email not sent");
            }
        });
    }
}

/// Non-blank gateway value exactly as sent; the signature covers these bytes.
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Trimmed, non-empty field value.
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
    use std::time::Duration;

    const SECRET: &str = "key_secret";

    struct Fixture {
        store: Arc<InMemoryReminderStore>,
        notifier: RecordingNotifier,
        handler: VerifyPaymentHandler,
        reminder: Reminder,
    }

    async fn fixture() -> Fixture {
        let now = Timestamp::now();
        let reminder = Reminder::create(ReminderId::new(), UserId::new("user-1").unwrap(), "Electricity", now, now)
            .unwrap()
            .with_amount(Some(1200.0))
            .unwrap()
            .with_email(Some("stored@example.com".to_string()));
        let store = Arc::new(InMemoryReminderStore::with_reminders([reminder.clone()]).await);
        let notifier = RecordingNotifier::new();
        let handler = VerifyPaymentHandler::new(
            store.clone(),
            Arc::new(notifier.clone()),
            SignatureVerifier::new(SECRET),
        );
        Fixture {
            store,
            notifier,
            handler,
            reminder,
        }
    }

    fn signed(reminder_id: ReminderId) -> VerifyPaymentCommand {
        VerifyPaymentCommand {
            order_id: Some("order_1".to_string()),
            payment_id: Some("pay_1".to_string()),
            signature: Some(SignatureVerifier::new(SECRET).sign_payment("order_1", "pay_1")),
            reminder_id: Some(reminder_id.to_string()),
            user_email: Some("payer@example.com".to_string()),
            bill_name: None,
            amount: None,
        }
    }

    async fn wait_for_email(notifier: &RecordingNotifier) -> Vec<EmailMessage> {
        for _ in 0..50 {
            let sent = notifier.sent().await;
            if !sent.is_empty() {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        Vec::new()
    }

    // ══════════════════════════════════════════════════════════════
    // Valid signature
    // ══════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_signature_marks_reminder_paid() {
        let f = fixture().await;

        let result = f.handler.handle(signed(f.reminder.id)).await.unwrap();

        assert!(result.reminder.is_paid);
        assert_eq!(result.reminder.payment_status, Some(PaymentStatus::Success));
        assert!(result.reminder.paid_at.is_some());
        assert_eq!(f.store.get(&f.reminder.id).await, Some(result.reminder));
    }

    #[tokio::test]
    async fn success_email_falls_back_to_stored_values() {
        let f = fixture().await;

        f.handler.handle(signed(f.reminder.id)).await.unwrap();

        let sent = f.notifier.sent_to("payer@example.com").await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Payment successful");
        assert!(sent[0].body.contains("\"Electricity\" of ₹1200 was successful"));
    }

    #[tokio::test]
    async fn success_email_prefers_caller_values_and_stored_address() {
        let f = fixture().await;
        let cmd = VerifyPaymentCommand {
            user_email: None,
            bill_name: Some("Power bill".to_string()),
            amount: Some(999.0),
            ..signed(f.reminder.id)
        };

        f.handler.handle(cmd).await.unwrap();

        let sent = f.notifier.sent_to("stored@example.com").await;
        assert!(sent[0].body.contains("\"Power bill\" of ₹999"));
    }

    #[tokio::test]
    async fn verifying_twice_leaves_reminder_paid() {
        let f = fixture().await;

        f.handler.handle(signed(f.reminder.id)).await.unwrap();
        let second = f.handler.handle(signed(f.reminder.id)).await.unwrap();

        assert!(second.reminder.is_paid);
        assert_eq!(second.reminder.payment_status, Some(PaymentStatus::Success));
    }

    #[tokio::test]
    async fn email_failure_does_not_change_outcome() {
        let f = fixture().await;
        let handler = VerifyPaymentHandler::new(
            f.store.clone(),
            Arc::new(RecordingNotifier::new().failing_for("payer@example.com")),
            SignatureVerifier::new(SECRET),
        );

        let result = handler.handle(signed(f.reminder.id)).await.unwrap();

        assert!(result.reminder.is_paid);
    }

    #[tokio::test]
    async fn valid_signature_for_unknown_reminder_is_not_found() {
        let f = fixture().await;
        let missing = ReminderId::new();

        let err = f.handler.handle(signed(missing)).await.unwrap_err();

        assert_eq!(err, ReminderError::NotFound(missing));
        assert!(f.notifier.sent().await.is_empty());
    }

    // ══════════════════════════════════════════════════════════════
    // Invalid signature
    // ══════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn invalid_signature_marks_failed_without_paying() {
        let f = fixture().await;
        let cmd = VerifyPaymentCommand {
            signature: Some("deadbeef".to_string()),
            ..signed(f.reminder.id)
        };

        let err = f.handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, ReminderError::InvalidSignature);
        let stored = f.store.get(&f.reminder.id).await.unwrap();
        assert!(!stored.is_paid);
        assert_eq!(stored.payment_status, Some(PaymentStatus::Failed));
    }

    #[tokio::test]
    async fn reformatted_signature_is_not_accepted() {
        let f = fixture().await;
        let signature = SignatureVerifier::new(SECRET).sign_payment("order_1", "pay_1");

        for variant in [signature.to_uppercase(), format!("  {}  ", signature)] {
            let cmd = VerifyPaymentCommand {
                signature: Some(variant),
                ..signed(f.reminder.id)
            };

            assert_eq!(f.handler.handle(cmd).await.unwrap_err(), ReminderError::InvalidSignature);
        }

        let stored = f.store.get(&f.reminder.id).await.unwrap();
        assert!(!stored.is_paid);
        assert_eq!(stored.payment_status, Some(PaymentStatus::Failed));
    }

    #[tokio::test]
    async fn invalid_signature_sends_failure_email_in_background() {
        let f = fixture().await;
        let cmd = VerifyPaymentCommand {
            signature: Some("deadbeef".to_string()),
            bill_name: Some("Electricity".to_string()),
            amount: Some(1200.0),
            ..signed(f.reminder.id)
        };

        let _ = f.handler.handle(cmd).await;

        let sent = wait_for_email(&f.notifier).await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Payment failed");
        assert_eq!(sent[0].to, "payer@example.com");
    }

    #[tokio::test]
    async fn invalid_signature_survives_store_failure() {
        let f = fixture().await;
        f.store.fail_writes();
        let cmd = VerifyPaymentCommand {
            signature: Some("deadbeef".to_string()),
            ..signed(f.reminder.id)
        };

        assert_eq!(f.handler.handle(cmd).await.unwrap_err(), ReminderError::InvalidSignature);
    }

    // ══════════════════════════════════════════════════════════════
    // Preconditions
    // ══════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn missing_fields_change_nothing() {
        let f = fixture().await;
        let cmd = VerifyPaymentCommand {
            payment_id: Some("  ".to_string()),
            ..signed(f.reminder.id)
        };

        let err = f.handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, ReminderError::missing_fields("Missing required fields"));
        assert_eq!(f.store.get(&f.reminder.id).await, Some(f.reminder));
    }

    #[tokio::test]
    async fn malformed_reminder_id_is_validation_error() {
        let f = fixture().await;
        let cmd = VerifyPaymentCommand {
            reminder_id: Some("not-a-uuid".to_string()),
            ..signed(f.reminder.id)
        };

        let err = f.handler.handle(cmd).await.unwrap_err();

        assert!(matches!(err, ReminderError::ValidationFailed { ref field, .. } if field == "reminderId"));
    }
}

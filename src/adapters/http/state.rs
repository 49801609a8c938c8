//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use crate::application::handlers::email::{SendDueRemindersHandler, SendTestEmailHandler};
use crate::application::handlers::notification::GetNotificationsHandler;
use crate::application::handlers::payment::{
    ConfirmDemoPaymentHandler, CreateOrderHandler, HandleGatewayWebhookHandler, VerifyPaymentHandler,
};
use crate::application::handlers::reminder::{CreateReminderHandler, ListRemindersHandler};
use crate::domain::payment::SignatureVerifier;
use crate::ports::{Notifier, PaymentGateway, ReminderReader, ReminderRepository};

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub reminder_repository: Arc<dyn ReminderRepository>,
    pub reminder_reader: Arc<dyn ReminderReader>,
    pub notifier: Arc<dyn Notifier>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    /// Verifies checkout signatures with the gateway key secret.
    pub payment_verifier: SignatureVerifier,
    /// Verifies webhook deliveries with the webhook secret.
    pub webhook_verifier: SignatureVerifier,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn create_reminder_handler(&self) -> CreateReminderHandler {
        CreateReminderHandler::new(self.reminder_repository.clone())
    }

    pub fn list_reminders_handler(&self) -> ListRemindersHandler {
        ListRemindersHandler::new(self.reminder_reader.clone())
    }

    pub fn get_notifications_handler(&self) -> GetNotificationsHandler {
        GetNotificationsHandler::new(self.reminder_reader.clone())
    }

    pub fn send_due_reminders_handler(&self) -> SendDueRemindersHandler {
        SendDueRemindersHandler::new(self.reminder_reader.clone(), self.notifier.clone())
    }

    pub fn send_test_email_handler(&self) -> SendTestEmailHandler {
        SendTestEmailHandler::new(self.notifier.clone())
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.payment_gateway.clone())
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(
            self.reminder_repository.clone(),
            self.notifier.clone(),
            self.payment_verifier.clone(),
        )
    }

    pub fn confirm_demo_payment_handler(&self) -> ConfirmDemoPaymentHandler {
        ConfirmDemoPaymentHandler::new(self.reminder_repository.clone(), self.notifier.clone())
    }

    pub fn webhook_handler(&self) -> HandleGatewayWebhookHandler {
        HandleGatewayWebhookHandler::new(self.webhook_verifier.clone())
    }
}

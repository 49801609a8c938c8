//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::email::{
    SendDueRemindersCommand, SendDueRemindersHandler, SendDueRemindersResult, SendTestEmailCommand,
    SendTestEmailHandler, SendTestEmailResult,
};
pub use handlers::notification::{GetNotificationsHandler, GetNotificationsQuery, GetNotificationsResult};
pub use handlers::payment::{
    ConfirmDemoPaymentCommand, ConfirmDemoPaymentHandler, ConfirmDemoPaymentResult, CreateOrderCommand,
    CreateOrderHandler, CreateOrderResult, HandleGatewayWebhookCommand, HandleGatewayWebhookHandler,
    VerifyPaymentCommand, VerifyPaymentHandler, VerifyPaymentResult, WebhookOutcome,
};
pub use handlers::reminder::{
    CreateReminderCommand, CreateReminderHandler, CreateReminderResult, ListRemindersHandler,
    ListRemindersQuery, ListRemindersResult,
};

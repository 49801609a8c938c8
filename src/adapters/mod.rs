//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (Supabase, mock)
//! - `email` - Outbound email (SMTP, Resend, SendGrid, recording)
//! - `http` - REST API (axum)
//! - `memory` - In-memory reminder store
//! - `postgres` - PostgreSQL reminder store
//! - `razorpay` - Payment gateway orders (Razorpay, mock)
//! - `scheduler` - Periodic due-reminder trigger

pub mod auth;
pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod razorpay;
pub mod scheduler;

pub use auth::{MockSessionValidator, SupabaseSessionValidator};
pub use email::{notifier_from_config, RecordingNotifier};
pub use memory::InMemoryReminderStore;
pub use postgres::{PostgresReminderReader, PostgresReminderRepository};
pub use razorpay::{MockPaymentGateway, RazorpayOrdersAdapter};
pub use scheduler::{DueReminderTrigger, DueReminderTriggerConfig};

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ReminderRepository` - Reminder writes and payment transitions
//! - `ReminderReader` - Feed, sweep and list queries
//!
//! ## External Service Ports
//!
//! - `Notifier` - Outbound email
//! - `PaymentGateway` - Checkout order creation
//! - `SessionValidator` - Bearer token validation

mod notifier;
mod payment_gateway;
mod reminder_reader;
mod reminder_repository;
mod session_validator;

pub use notifier::{EmailMessage, Notifier, NotifierError};
pub use payment_gateway::{CreateOrderRequest, Order, PaymentError, PaymentErrorCode, PaymentGateway};
pub use reminder_reader::ReminderReader;
pub use reminder_repository::ReminderRepository;
pub use session_validator::SessionValidator;

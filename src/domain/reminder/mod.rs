//! Reminder domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Reminder aggregate entity and payment transitions
//! - `priority` / `frequency` - attribute enums
//! - `payment_status` - last known payment outcome
//! - `errors` - operation-level error type

mod aggregate;
mod errors;
mod frequency;
mod payment_status;
mod priority;

pub use aggregate::Reminder;
pub use errors::ReminderError;
pub use frequency::Frequency;
pub use payment_status::{PaymentOutcome, PaymentStatus};
pub use priority::Priority;

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `reminder` - Reminder aggregate and payment-state transitions
//! - `notification` - Notification feed, sweep window and email templates
//! - `payment` - Gateway signature verification and webhook events

pub mod foundation;
pub mod notification;
pub mod payment;
pub mod reminder;

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `reminder` - creating and listing reminders
//! - `notification` - the in-app notification feed
//! - `email` - the due-reminder sweep and test email
//! - `payment` - checkout orders, verification, demo confirmation, webhooks

pub mod email;
pub mod notification;
pub mod payment;
pub mod reminder;

//! Reminder repository port (write side).
//!
//! Defines the contract for persisting Reminder aggregates and applying
//! payment transitions to them.
//!
//! # Design
//!
//! - **Single-record writes**: every mutation targets one reminder by id
//! - **Last write wins**: concurrent payment transitions on the same reminder
//!   are not serialized beyond the store's own single-row atomicity
//!
//! # Example
//!
//! ```ignore
//! async fn confirm(
//!     repo: &dyn ReminderRepository,
//!     id: &ReminderId,
//! ) -> Result<Reminder, ReminderError> {
//!     let outcome = PaymentOutcome::Succeeded { paid_at: Timestamp::now() };
//!     repo.record_payment_outcome(id, outcome)
//!         .await?
//!         .ok_or_else(|| ReminderError::not_found(*id))
//! }
//! ```

use crate::domain::foundation::{DomainError, ReminderId};
use crate::domain::reminder::{PaymentOutcome, Reminder};
use async_trait::async_trait;

/// Repository port for Reminder persistence.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Save a new reminder.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError>;

    /// Find a reminder by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>, DomainError>;

    /// Apply a payment transition and return the updated reminder.
    ///
    /// Returns `None` when no reminder has the given id; nothing is written.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn record_payment_outcome(
        &self,
        id: &ReminderId,
        outcome: PaymentOutcome,
    ) -> Result<Option<Reminder>, DomainError>;
}

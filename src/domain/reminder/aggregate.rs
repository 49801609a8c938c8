//! Reminder aggregate entity.
//!
//! A Reminder is a tracked bill obligation owned by a single user. It is the
//! only persistent entity in the system.
//!
//! # Invariants
//!
//! - `bill_name` is never blank
//! - `payment_status == Some(Success)` implies `is_paid`
//! - `paid_at` is only set by a successful payment

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReminderId, Timestamp, UserId, ValidationError};

use super::{Frequency, PaymentOutcome, PaymentStatus, Priority};

/// Reminder aggregate - one bill with a due date and payment state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,

    /// Owner of the reminder.
    pub user_id: UserId,

    /// Address the sweep and payment emails go to.
    pub user_email: Option<String>,

    pub bill_name: String,

    /// Amount in major currency units; display only.
    pub amount: Option<f64>,

    /// Due date (date granularity, stored as a UTC timestamp).
    pub due_date: Timestamp,

    pub priority: Priority,

    pub frequency: Frequency,

    pub is_paid: bool,

    pub paid_at: Option<Timestamp>,

    pub payment_status: Option<PaymentStatus>,

    pub created_at: Timestamp,
}

impl Reminder {
    /// Creates an unpaid reminder with default priority and frequency.
    ///
    /// # Errors
    ///
    /// `EmptyField` if the bill name is blank.
    pub fn create(
        id: ReminderId,
        user_id: UserId,
        bill_name: impl Into<String>,
        due_date: Timestamp,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let bill_name = bill_name.into().trim().to_string();
        if bill_name.is_empty() {
            return Err(ValidationError::empty_field("bill_name"));
        }

        Ok(Self {
            id,
            user_id,
            user_email: None,
            bill_name,
            amount: None,
            due_date,
            priority: Priority::default(),
            frequency: Frequency::default(),
            is_paid: false,
            paid_at: None,
            payment_status: None,
            created_at,
        })
    }

    /// Sets the amount.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if the amount is not a finite number.
    pub fn with_amount(mut self, amount: Option<f64>) -> Result<Self, ValidationError> {
        if let Some(value) = amount {
            if !value.is_finite() {
                return Err(ValidationError::invalid_format("amount", "must be a finite number"));
            }
        }
        self.amount = amount;
        Ok(self)
    }

    /// Sets the notification address; blank addresses are stored as absent.
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.user_email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Returns the address to email, if one is on file and non-blank.
    pub fn recipient(&self) -> Option<&str> {
        self.user_email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Returns true when the reminder carries a recorded payment outcome.
    pub fn has_payment_outcome(&self) -> bool {
        self.payment_status.is_some()
    }

    /// Records a confirmed payment.
    pub fn mark_paid(&mut self, paid_at: Timestamp) {
        self.is_paid = true;
        self.paid_at = Some(paid_at);
        self.payment_status = Some(PaymentStatus::Success);
    }

    /// Records a rejected payment; the paid flag is left as it was.
    pub fn mark_payment_failed(&mut self) {
        self.payment_status = Some(PaymentStatus::Failed);
    }

    /// Applies a payment transition.
    pub fn apply(&mut self, outcome: PaymentOutcome) {
        match outcome {
            PaymentOutcome::Succeeded { paid_at } => self.mark_paid(paid_at),
            PaymentOutcome::Failed => self.mark_payment_failed(),
        }
    }

    /// Returns true when the due date falls in `[from, to]` inclusive.
    pub fn is_due_between(&self, from: &Timestamp, to: &Timestamp) -> bool {
        !self.due_date.is_before(from) && !self.due_date.is_after(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn test_reminder() -> Reminder {
        Reminder::create(
            ReminderId::new(),
            UserId::new("user-123").unwrap(),
            "Electricity",
            day(2024, 3, 10),
            day(2024, 3, 1),
        )
        .unwrap()
    }

    #[test]
    fn create_applies_defaults() {
        let r = test_reminder();

        assert!(!r.is_paid);
        assert!(r.paid_at.is_none());
        assert!(r.payment_status.is_none());
        assert_eq!(r.priority, Priority::Medium);
        assert_eq!(r.frequency, Frequency::Monthly);
    }

    #[test]
    fn create_rejects_blank_bill_name() {
        let result = Reminder::create(
            ReminderId::new(),
            UserId::new("user-123").unwrap(),
            "   ",
            day(2024, 3, 10),
            day(2024, 3, 1),
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn with_amount_rejects_nan() {
        let result = test_reminder().with_amount(Some(f64::NAN));
        assert!(result.is_err());
    }

    #[test]
    fn blank_email_is_not_a_recipient() {
        let r = test_reminder().with_email(Some("  ".to_string()));
        assert!(r.user_email.is_none());
        assert!(r.recipient().is_none());

        let r = test_reminder().with_email(Some(" a@b.com ".to_string()));
        assert_eq!(r.recipient(), Some("a@b.com"));
    }

    #[test]
    fn mark_paid_sets_success_state() {
        let mut r = test_reminder();
        let now = day(2024, 3, 9);

        r.mark_paid(now);

        assert!(r.is_paid);
        assert_eq!(r.paid_at, Some(now));
        assert_eq!(r.payment_status, Some(PaymentStatus::Success));
    }

    #[test]
    fn mark_paid_twice_stays_successful() {
        let mut r = test_reminder();
        r.apply(PaymentOutcome::Succeeded { paid_at: day(2024, 3, 9) });
        r.apply(PaymentOutcome::Succeeded { paid_at: day(2024, 3, 9) });

        assert!(r.is_paid);
        assert_eq!(r.payment_status, Some(PaymentStatus::Success));
    }

    #[test]
    fn failure_never_marks_paid() {
        let mut r = test_reminder();
        r.apply(PaymentOutcome::Failed);

        assert!(!r.is_paid);
        assert!(r.paid_at.is_none());
        assert_eq!(r.payment_status, Some(PaymentStatus::Failed));
    }

    #[test]
    fn due_window_is_inclusive_on_both_ends() {
        let r = test_reminder();

        assert!(r.is_due_between(&day(2024, 3, 10), &day(2024, 3, 10)));
        assert!(r.is_due_between(&day(2024, 3, 3), &day(2024, 3, 10)));
        assert!(!r.is_due_between(&day(2024, 3, 11), &day(2024, 3, 20)));
        assert!(!r.is_due_between(&day(2024, 3, 1), &day(2024, 3, 9)));
    }
}

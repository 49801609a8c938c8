//! In-app notification view objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReminderId, Timestamp};
use crate::domain::reminder::{Priority, Reminder};

/// Classification of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Overdue,
    DueToday,
    Upcoming,
    PaymentSuccess,
    PaymentFailed,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Overdue => "overdue",
            NotificationType::DueToday => "due_today",
            NotificationType::Upcoming => "upcoming",
            NotificationType::PaymentSuccess => "payment_success",
            NotificationType::PaymentFailed => "payment_failed",
        }
    }

    /// Returns true for the two payment-outcome types.
    pub fn is_payment(&self) -> bool {
        matches!(self, NotificationType::PaymentSuccess | NotificationType::PaymentFailed)
    }
}

/// A single entry in the user's notification feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: ReminderId,
    pub bill_name: String,
    pub amount: Option<f64>,
    pub due_date: Timestamp,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
}

impl Notification {
    /// Builds a notification carrying the reminder's display fields.
    pub fn for_reminder(reminder: &Reminder, kind: NotificationType, message: String) -> Self {
        Self {
            id: reminder.id,
            bill_name: reminder.bill_name.clone(),
            amount: reminder.amount,
            due_date: reminder.due_date,
            priority: reminder.priority,
            kind,
            message,
        }
    }
}

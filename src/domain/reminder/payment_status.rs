//! Last known payment outcome of a reminder.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Outcome recorded by the payment verifier or the demo path.
///
/// Independent of `is_paid`: `Success` implies paid, but a reminder can also be
/// paid without a gateway transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
}

impl PaymentStatus {
    /// Returns the stored/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(PaymentStatus::Success),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(ValidationError::invalid_format(
                "payment_status",
                format!("unknown payment status '{}'", other),
            )),
        }
    }
}

/// A payment-state transition to apply to a single reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Payment confirmed: paid, stamped, status `success`.
    Succeeded { paid_at: Timestamp },
    /// Payment rejected: status `failed`, paid flag untouched.
    Failed,
}

impl PaymentOutcome {
    /// The status this outcome records.
    pub fn status(&self) -> PaymentStatus {
        match self {
            PaymentOutcome::Succeeded { .. } => PaymentStatus::Success,
            PaymentOutcome::Failed => PaymentStatus::Failed,
        }
    }
}

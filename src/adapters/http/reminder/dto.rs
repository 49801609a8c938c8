//! HTTP DTOs for reminder endpoints.
//!
//! Field names match the stored document layout (`bill_name`, `due_date`, ...)
//! that the web client already reads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::reminder::{Frequency, Priority, Reminder};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a reminder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReminderRequest {
    #[serde(default)]
    pub bill_name: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub user_email: Option<String>,
}

/// Parses a due date given as a calendar date or a full timestamp.
///
/// Calendar dates are taken as midnight UTC.
pub fn parse_due_date(value: &str) -> Result<Timestamp, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field("due_date"));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Timestamp::from_date(date));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| Timestamp::from_datetime(dt.with_timezone(&Utc)))
        .map_err(|_| ValidationError::invalid_format("due_date", "expected YYYY-MM-DD or RFC 3339"))
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A reminder as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ReminderResponse {
    pub id: String,
    pub user_id: String,
    pub user_email: Option<String>,
    pub bill_name: String,
    pub amount: Option<f64>,
    pub due_date: String,
    pub priority: Priority,
    pub frequency: Frequency,
    pub is_paid: bool,
    pub paid_at: Option<String>,
    pub payment_status: Option<String>,
    pub created_at: String,
}

impl From<Reminder> for ReminderResponse {
    fn from(r: Reminder) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id.to_string(),
            user_email: r.user_email,
            bill_name: r.bill_name,
            amount: r.amount,
            due_date: r.due_date.as_datetime().to_rfc3339(),
            priority: r.priority,
            frequency: r.frequency,
            is_paid: r.is_paid,
            paid_at: r.paid_at.map(|t| t.as_datetime().to_rfc3339()),
            payment_status: r.payment_status.map(|s| s.as_str().to_string()),
            created_at: r.created_at.as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderListResponse {
    pub reminders: Vec<ReminderResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_date_as_midnight_utc() {
        let ts = parse_due_date("2024-03-07").unwrap();
        assert_eq!(ts.as_datetime().to_rfc3339(), "2024-03-07T00:00:00+00:00");
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_due_date("2024-03-07T10:00:00+05:30").unwrap();
        assert_eq!(ts.as_datetime().to_rfc3339(), "2024-03-07T04:30:00+00:00");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_due_date("07/03/2024").is_err());
        assert!(matches!(parse_due_date("  "), Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn request_reads_enum_values() {
        let req: CreateReminderRequest = serde_json::from_value(serde_json::json!({
            "bill_name": "Rent",
            "due_date": "2024-03-07",
            "priority": "high",
            "frequency": "one-time"
        }))
        .unwrap();

        assert_eq!(req.priority, Some(Priority::High));
        assert_eq!(req.frequency, Some(Frequency::OneTime));
        assert_eq!(req.amount, None);
    }
}

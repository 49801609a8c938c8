//! Notification Deriver - turns a user's reminders into a notification feed.
//!
//! Pure: no I/O, `now` is supplied by the caller. The feed is the payment
//! notifications (newest first, capped) followed by the due notifications
//! (ascending due date).

use crate::domain::foundation::Timestamp;
use crate::domain::reminder::{PaymentStatus, Reminder};

use super::{Notification, NotificationType};

/// Unpaid reminders due up to this many days ahead are surfaced.
pub const DUE_HORIZON_DAYS: i64 = 3;

/// Maximum number of payment notifications in a feed.
pub const PAYMENT_NOTIFICATION_LIMIT: usize = 10;

/// Derives the notification feed for one user's reminders.
pub fn derive_notifications(reminders: &[Reminder], now: Timestamp) -> Vec<Notification> {
    let mut feed = payment_notifications(reminders);
    feed.extend(due_notifications(reminders, now));
    feed
}

/// Calendar days from `now` to `due`; negative when overdue.
pub fn days_until(due: &Timestamp, now: &Timestamp) -> i64 {
    (due.date() - now.date()).num_days()
}

fn due_notifications(reminders: &[Reminder], now: Timestamp) -> Vec<Notification> {
    let horizon = now.add_days(DUE_HORIZON_DAYS);

    let mut due: Vec<&Reminder> = reminders
        .iter()
        .filter(|r| !r.is_paid && !r.due_date.is_after(&horizon))
        .collect();
    due.sort_by_key(|r| r.due_date);

    due.into_iter()
        .map(|r| {
            let diff = days_until(&r.due_date, &now);
            let (kind, message) = if diff < 0 {
                (
                    NotificationType::Overdue,
                    format!("⚠️ {} was due {} day(s) ago.", r.bill_name, diff.abs()),
                )
            } else if diff == 0 {
                (NotificationType::DueToday, format!("📅 {} is due today.", r.bill_name))
            } else {
                (
                    NotificationType::Upcoming,
                    format!("⏰ {} is due in {} day(s).", r.bill_name, diff),
                )
            };
            Notification::for_reminder(r, kind, message)
        })
        .collect()
}

fn payment_notifications(reminders: &[Reminder]) -> Vec<Notification> {
    let mut settled: Vec<&Reminder> = reminders.iter().filter(|r| r.has_payment_outcome()).collect();
    settled.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    settled
        .into_iter()
        .take(PAYMENT_NOTIFICATION_LIMIT)
        .filter_map(|r| {
            let notification = match r.payment_status? {
                PaymentStatus::Success => Notification::for_reminder(
                    r,
                    NotificationType::PaymentSuccess,
                    format!(
                        "💰 Payment successful for {}. Amount: ₹{}.",
                        r.bill_name,
                        r.amount.map(|a| a.to_string()).unwrap_or_default()
                    ),
                ),
                PaymentStatus::Failed => Notification::for_reminder(
                    r,
                    NotificationType::PaymentFailed,
                    format!("❌ Payment failed for {}. Please try again.", r.bill_name),
                ),
            };
            Some(notification)
        })
        .collect()
}

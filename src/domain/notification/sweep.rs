//! Due-reminder sweep window.

use chrono::{NaiveTime, TimeZone, Utc};

use crate::domain::foundation::Timestamp;
use crate::domain::reminder::Reminder;

/// Horizon used when the caller does not supply `daysAhead`.
pub const DEFAULT_DAYS_AHEAD: i64 = 30;

/// Inclusive due-date range `[start_of_today, start_of_today + days_ahead]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl SweepWindow {
    /// Window anchored at midnight of `now`'s calendar day in `tz`.
    pub fn starting_today<Tz: TimeZone>(now: Timestamp, tz: &Tz, days_ahead: i64) -> Self {
        let today = now.date_in(tz);
        let start = tz
            .from_local_datetime(&today.and_time(NaiveTime::MIN))
            .earliest()
            .map(|dt| Timestamp::from_datetime(dt.with_timezone(&Utc)))
            .unwrap_or_else(|| Timestamp::from_date(today));

        Self {
            start,
            end: start.add_days(days_ahead),
        }
    }

    pub fn contains(&self, ts: &Timestamp) -> bool {
        !ts.is_before(&self.start) && !ts.is_after(&self.end)
    }

    /// Returns true when the reminder should receive a sweep email.
    pub fn selects(&self, reminder: &Reminder) -> bool {
        !reminder.is_paid && reminder.recipient().is_some() && reminder.is_due_between(&self.start, &self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ReminderId, UserId};
    use chrono::{FixedOffset, NaiveDate};

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn candidate(due: Timestamp) -> Reminder {
        Reminder::create(ReminderId::new(), UserId::new("u").unwrap(), "Rent", due, day(2024, 1, 1))
            .unwrap()
            .with_email(Some("user@example.com".to_string()))
    }

    #[test]
    fn window_starts_at_midnight() {
        let now = Timestamp::from_datetime(
            chrono::DateTime::parse_from_rfc3339("2024-03-10T17:45:00Z").unwrap().with_timezone(&Utc),
        );
        let window = SweepWindow::starting_today(now, &Utc, 7);

        assert_eq!(window.start, day(2024, 3, 10));
        assert_eq!(window.end, day(2024, 3, 17));
    }

    #[test]
    fn window_follows_local_calendar_day() {
        // 20:00 UTC on the 10th is already the 11th at +05:30.
        let now = Timestamp::from_datetime(
            chrono::DateTime::parse_from_rfc3339("2024-03-10T20:00:00Z").unwrap().with_timezone(&Utc),
        );
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let window = SweepWindow::starting_today(now, &ist, 0);

        let expected = chrono::DateTime::parse_from_rfc3339("2024-03-11T00:00:00+05:30")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(window.start, Timestamp::from_datetime(expected));
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let window = SweepWindow::starting_today(day(2024, 3, 10), &Utc, 7);

        assert!(window.selects(&candidate(day(2024, 3, 17))));
        assert!(!window.selects(&candidate(day(2024, 3, 18))));
        assert!(window.selects(&candidate(day(2024, 3, 10))));
        assert!(!window.selects(&candidate(day(2024, 3, 9))));
    }

    #[test]
    fn paid_reminders_are_never_selected() {
        let window = SweepWindow::starting_today(day(2024, 3, 10), &Utc, 7);
        let mut paid = candidate(day(2024, 3, 12));
        paid.is_paid = true;

        assert!(!window.selects(&paid));
    }

    #[test]
    fn reminders_without_email_are_not_selected() {
        let window = SweepWindow::starting_today(day(2024, 3, 10), &Utc, 7);
        let r = candidate(day(2024, 3, 12)).with_email(None);

        assert!(!window.selects(&r));
    }

    #[test]
    fn negative_horizon_selects_nothing() {
        let window = SweepWindow::starting_today(day(2024, 3, 10), &Utc, -1);
        assert!(!window.contains(&day(2024, 3, 10)));
    }
}

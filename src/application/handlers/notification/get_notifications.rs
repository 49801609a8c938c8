//! GetNotificationsHandler - Query handler for a user's notification feed.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::notification::{derive_notifications, Notification, DUE_HORIZON_DAYS};
use crate::domain::reminder::ReminderError;
use crate::ports::ReminderReader;

#[derive(Debug, Clone)]
pub struct GetNotificationsQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct GetNotificationsResult {
    /// Payment notifications first, then due notifications.
    pub notifications: Vec<Notification>,
}

pub struct GetNotificationsHandler {
    reader: Arc<dyn ReminderReader>,
}

impl GetNotificationsHandler {
    pub fn new(reader: Arc<dyn ReminderReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetNotificationsQuery) -> Result<GetNotificationsResult, ReminderError> {
        self.handle_at(query, Timestamp::now()).await
    }

    /// Builds the feed as of `now`.
    pub async fn handle_at(
        &self,
        query: GetNotificationsQuery,
        now: Timestamp,
    ) -> Result<GetNotificationsResult, ReminderError> {
        let candidates = self
            .reader
            .find_notification_candidates(&query.user_id, now.add_days(DUE_HORIZON_DAYS))
            .await
            .map_err(|e| {
                tracing::error!(user_id = %query.user_id, error = %e, "Error fetching notifications");
                e
            })?;

        let notifications = derive_notifications(&candidates, now);

        tracing::debug!(
            user_id = %query.user_id,
            count = notifications.len(),
            "Notifications derived"
        );

        Ok(GetNotificationsResult { notifications })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryReminderStore;
    use crate::domain::foundation::ReminderId;
    use crate::domain::notification::NotificationType;
    use crate::domain::reminder::{PaymentOutcome, Reminder};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn reminder(user: &str, name: &str, due: Timestamp) -> Reminder {
        Reminder::create(ReminderId::new(), UserId::new(user).unwrap(), name, due, day(2024, 1, 1)).unwrap()
    }

    fn query(user: &str) -> GetNotificationsQuery {
        GetNotificationsQuery {
            user_id: UserId::new(user).unwrap(),
        }
    }

    #[tokio::test]
    async fn builds_feed_for_the_user_only() {
        let now = day(2024, 3, 10);
        let mut paid = reminder("alice", "Water", day(2024, 3, 1));
        paid.apply(PaymentOutcome::Succeeded { paid_at: now });

        let store = InMemoryReminderStore::with_reminders([
            reminder("alice", "Rent", day(2024, 3, 7)),
            reminder("alice", "Far away", day(2024, 4, 30)),
            reminder("bob", "Gym", day(2024, 3, 10)),
            paid,
        ])
        .await;
        let handler = GetNotificationsHandler::new(Arc::new(store));

        let feed = handler.handle_at(query("alice"), now).await.unwrap().notifications;

        let kinds: Vec<_> = feed.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationType::PaymentSuccess, NotificationType::Overdue]);
        assert_eq!(feed[1].message, "⚠️ Rent was due 3 day(s) ago.");
    }

    #[tokio::test]
    async fn empty_store_gives_empty_feed() {
        let handler = GetNotificationsHandler::new(Arc::new(InMemoryReminderStore::new()));

        let feed = handler.handle(query("alice")).await.unwrap();

        assert!(feed.notifications.is_empty());
    }
}

//! In-Memory Reminder Store
//!
//! Implements both reminder ports over a map. Used by tests and by local runs
//! without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ReminderId, Timestamp, UserId};
use crate::domain::notification::SweepWindow;
use crate::domain::reminder::{PaymentOutcome, Reminder};
use crate::ports::{ReminderReader, ReminderRepository};

/// In-memory reminder storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderStore {
    reminders: Arc<RwLock<HashMap<ReminderId, Reminder>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `reminders`.
    pub async fn with_reminders(reminders: impl IntoIterator<Item = Reminder>) -> Self {
        let store = Self::new();
        {
            let mut map = store.reminders.write().await;
            for r in reminders {
                map.insert(r.id, r);
            }
        }
        store
    }

    /// Makes every subsequent write fail with a database error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Snapshot of one reminder.
    pub async fn get(&self, id: &ReminderId) -> Option<Reminder> {
        self.reminders.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.reminders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reminders.read().await.is_empty()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::database("simulated write failure"));
        }
        Ok(())
    }

    async fn select(&self, predicate: impl Fn(&Reminder) -> bool) -> Vec<Reminder> {
        let mut matches: Vec<Reminder> = self
            .reminders
            .read()
            .await
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        matches.sort_by_key(|r| r.due_date);
        matches
    }
}

#[async_trait]
impl ReminderRepository for InMemoryReminderStore {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError> {
        self.check_writable()?;
        self.reminders.write().await.insert(reminder.id, reminder.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>, DomainError> {
        Ok(self.get(id).await)
    }

    async fn record_payment_outcome(
        &self,
        id: &ReminderId,
        outcome: PaymentOutcome,
    ) -> Result<Option<Reminder>, DomainError> {
        self.check_writable()?;
        let mut reminders = self.reminders.write().await;
        Ok(reminders.get_mut(id).map(|r| {
            r.apply(outcome);
            r.clone()
        }))
    }
}

#[async_trait]
impl ReminderReader for InMemoryReminderStore {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Reminder>, DomainError> {
        Ok(self.select(|r| &r.user_id == user_id).await)
    }

    async fn find_notification_candidates(
        &self,
        user_id: &UserId,
        due_by: Timestamp,
    ) -> Result<Vec<Reminder>, DomainError> {
        Ok(self
            .select(|r| {
                &r.user_id == user_id
                    && ((!r.is_paid && !r.due_date.is_after(&due_by)) || r.has_payment_outcome())
            })
            .await)
    }

    async fn find_sweep_candidates(&self, window: &SweepWindow) -> Result<Vec<Reminder>, DomainError> {
        Ok(self.select(|r| window.selects(r)).await)
    }
}

//! In-memory adapters for tests and database-less local runs.

mod reminder_store;

pub use reminder_store::InMemoryReminderStore;

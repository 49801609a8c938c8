//! Background scheduling adapters.

mod due_reminder_trigger;

pub use due_reminder_trigger::{DueReminderTrigger, DueReminderTriggerConfig, TriggerOutcome};

//! Periodic sweep trigger configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Scheduler configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Run the due-reminder trigger loop
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Seconds between sweep requests
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// `daysAhead` sent with each sweep request
    #[serde(default = "default_days_ahead")]
    pub days_ahead: i64,
}

impl SchedulerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && self.interval_secs == 0 {
            return Err(ValidationError::InvalidSchedulerInterval);
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interval_secs: default_interval(),
            days_ahead: default_days_ahead(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_interval() -> u64 {
    30
}

fn default_days_ahead() -> i64 {
    7
}

//! DueReminderTrigger - background loop that kicks off the due-reminder sweep.
//!
//! Every tick it POSTs `{"daysAhead": N}` to the service's own
//! `/api/emails/send-due-reminders` endpoint through the public base URL, so
//! the sweep runs with the same request handling as a manual call.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `interval` | 30s | Time between sweep requests |
//! | `days_ahead` | 7 | Horizon passed to the sweep |
//!
//! A failed request is logged and the loop carries on with the next tick.

use std::time::Duration;

use serde_json::json;
use tokio::sync::watch;
use tokio::time;

use crate::config::AppConfig;

const SWEEP_PATH: &str = "/api/emails/send-due-reminders";

/// Configuration for the DueReminderTrigger.
#[derive(Debug, Clone)]
pub struct DueReminderTriggerConfig {
    /// Base URL the service is reachable on, without a trailing slash.
    pub base_url: String,

    /// Time between sweep requests.
    pub interval: Duration,

    /// `daysAhead` sent with each request.
    pub days_ahead: i64,
}

impl DueReminderTriggerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            interval: Duration::from_secs(30),
            days_ahead: 7,
        }
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(config.server.public_base_url())
            .with_interval(config.scheduler.interval())
            .with_days_ahead(config.scheduler.days_ahead)
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_days_ahead(mut self, days_ahead: i64) -> Self {
        self.days_ahead = days_ahead;
        self
    }

    fn sweep_url(&self) -> String {
        format!("{}{}", self.base_url, SWEEP_PATH)
    }
}

/// Outcome of one trigger request.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerOutcome {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

/// Periodically requests a due-reminder sweep.
pub struct DueReminderTrigger {
    config: DueReminderTriggerConfig,
    http_client: reqwest::Client,
}

impl DueReminderTrigger {
    pub fn new(config: DueReminderTriggerConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Run the trigger loop until the shutdown signal is received.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.interval);
        // The first tick completes immediately; skip it so the server is listening first.
        interval.tick().await;

        tracing::info!(
            url = %self.config.sweep_url(),
            interval_secs = self.config.interval.as_secs(),
            days_ahead = self.config.days_ahead,
            "Due-reminder trigger started"
        );

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        tracing::info!("Due-reminder trigger stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    // Errors are logged inside; the loop never stops on them.
                    let _ = self.trigger_once().await;
                }
            }
        }
    }

    /// Send exactly one sweep request.
    pub async fn trigger_once(&self) -> Result<TriggerOutcome, reqwest::Error> {
        let url = self.config.sweep_url();
        tracing::debug!(url = %url, "Triggering due-reminder sweep");

        let response = match self
            .http_client
            .post(&url)
            .json(&json!({ "daysAhead": self.config.days_ahead }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Due-reminder sweep request failed");
                return Err(e);
            }
        };

        let status = response.status().as_u16();
        let body = response.json::<serde_json::Value>().await.ok();

        tracing::info!(status, body = ?body, "Due-reminder sweep response");
        Ok(TriggerOutcome { status, body })
    }
}

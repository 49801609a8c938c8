//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYBLE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use payble::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod email;
mod error;
mod payment;
mod scheduler;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailProvider};
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use scheduler::SchedulerConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, public URL)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration (Supabase JWT)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Payment configuration (Razorpay)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Email configuration (SMTP / Resend / SendGrid)
    #[serde(default)]
    pub email: EmailConfig,

    /// Periodic due-reminder trigger
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYBLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYBLE__SERVER__PORT=5001` -> `server.port = 5001`
    /// - `PAYBLE__PAYMENT__RAZORPAY_KEY_ID=...` -> `payment.razorpay_key_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYBLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate(&self.server.environment)?;
        self.auth.validate(&self.server.environment)?;
        self.payment.validate()?;
        self.email.validate()?;
        self.scheduler.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[(&str, &str)] = &[
        ("PAYBLE__DATABASE__URL", "postgresql://test@localhost/payble"),
        ("PAYBLE__AUTH__JWT_SECRET", "jwt-secret"),
        ("PAYBLE__PAYMENT__RAZORPAY_KEY_ID", "rzp_test_key"),
        ("PAYBLE__PAYMENT__RAZORPAY_KEY_SECRET", "rzp_secret"),
        ("PAYBLE__EMAIL__SMTP_HOST", "smtp.example.com"),
        ("PAYBLE__EMAIL__SMTP_USER", "bills@example.com"),
        ("PAYBLE__EMAIL__SMTP_PASSWORD", "app-password"),
    ];

    const EXTRA: &[&str] = &[
        "PAYBLE__SERVER__PORT",
        "PAYBLE__SERVER__ENVIRONMENT",
        "PAYBLE__EMAIL__PROVIDER",
        "PAYBLE__SCHEDULER__DAYS_AHEAD",
    ];

    fn set_minimal_env() {
        for (key, value) in VARS {
            env::set_var(key, value);
        }
    }

    fn clear_env() {
        for (key, _) in VARS {
            env::remove_var(key);
        }
        for key in EXTRA {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/payble");
        assert_eq!(config.payment.razorpay_key_id, "rzp_test_key");
        assert_eq!(config.payment.webhook_secret(), "rzp_secret");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.email.provider, EmailProvider::Smtp);
        assert_eq!(config.scheduler.days_ahead, 7);
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PAYBLE__SERVER__PORT", "3000");
        env::set_var("PAYBLE__EMAIL__PROVIDER", "resend");
        env::set_var("PAYBLE__SCHEDULER__DAYS_AHEAD", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.email.provider, EmailProvider::Resend);
        assert_eq!(config.scheduler.days_ahead, 3);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PAYBLE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}

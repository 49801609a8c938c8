//! Payble API server.
//!
//! Loads configuration, wires adapters to ports, serves the HTTP API and
//! runs the periodic due-reminder trigger until shutdown.

use std::sync::Arc;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use payble::adapters::auth::{SupabaseConfig, SupabaseSessionValidator};
use payble::adapters::email::notifier_from_config;
use payble::adapters::http::{api_router, with_http_layers, AppState, AuthState};
use payble::adapters::memory::InMemoryReminderStore;
use payble::adapters::postgres::{run_migrations, PostgresReminderReader, PostgresReminderRepository};
use payble::adapters::razorpay::{RazorpayConfig, RazorpayOrdersAdapter};
use payble::adapters::scheduler::{DueReminderTrigger, DueReminderTriggerConfig};
use payble::config::{AppConfig, DatabaseConfig, ServerConfig};
use payble::domain::payment::SignatureVerifier;
use payble::ports::{ReminderReader, ReminderRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    config.validate().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    info!(
        environment = ?config.server.environment,
        email_provider = ?config.email.provider,
        scheduler_enabled = config.scheduler.enabled,
        "Configuration loaded"
    );

    let (pool, reminder_repository, reminder_reader) = reminder_store(&config.database).await?;

    let notifier = notifier_from_config(&config.email)?;
    let payment_gateway = Arc::new(RazorpayOrdersAdapter::new(RazorpayConfig::from_app_config(
        &config.payment,
    )));

    let state = AppState {
        reminder_repository,
        reminder_reader,
        notifier,
        payment_gateway,
        payment_verifier: SignatureVerifier::new(config.payment.razorpay_key_secret.clone()),
        webhook_verifier: SignatureVerifier::new(config.payment.webhook_secret()),
    };

    let validator = Arc::new(SupabaseSessionValidator::new(SupabaseConfig::from_app_config(
        &config.auth,
    )));
    let auth = AuthState::new(validator).with_user_id_header(config.auth.allow_user_id_header);
    if config.auth.allow_user_id_header {
        warn!("X-User-Id header identity is enabled");
    }

    let app = with_http_layers(api_router(state, auth), &config.server);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let trigger_handle = if config.scheduler.enabled {
        let trigger = DueReminderTrigger::new(DueReminderTriggerConfig::from_app_config(&config));
        Some(tokio::spawn(async move { trigger.run(shutdown_rx).await }))
    } else {
        info!("Due-reminder trigger disabled");
        None
    };

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    let _ = shutdown_tx.send(true);
    if let Some(handle) = trigger_handle {
        if let Err(e) = handle.await {
            error!("Due-reminder trigger task failed: {}", e);
        }
    }
    if let Some(pool) = pool {
        pool.close().await;
    }
    info!("Shutdown complete");

    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

type ReminderStore = (
    Option<PgPool>,
    Arc<dyn ReminderRepository>,
    Arc<dyn ReminderReader>,
);

/// Postgres when a URL is configured, otherwise an in-memory store.
async fn reminder_store(config: &DatabaseConfig) -> Result<ReminderStore> {
    if !config.is_configured() {
        warn!("No database URL configured; reminders are kept in memory");
        let store = Arc::new(InMemoryReminderStore::new());
        let repository: Arc<dyn ReminderRepository> = store.clone();
        let reader: Arc<dyn ReminderReader> = store;
        return Ok((None, repository, reader));
    }

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await?;
    info!("Database connection established");

    if config.run_migrations {
        info!("Running database migrations...");
        run_migrations(&pool).await?;
        info!("Migrations completed");
    }

    let repository: Arc<dyn ReminderRepository> = Arc::new(PostgresReminderRepository::new(pool.clone()));
    let reader: Arc<dyn ReminderReader> = Arc::new(PostgresReminderReader::new(pool.clone()));
    Ok((Some(pool), repository, reader))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresReminderRepository` - Writes and payment transitions
//! - `PostgresReminderReader` - Feed, sweep and list queries
//!
//! Schema lives in `migrations/` at the crate root and is embedded in
//! [`MIGRATOR`].

mod reminder_reader;
mod reminder_repository;
mod reminder_row;

pub use reminder_reader::PostgresReminderReader;
pub use reminder_repository::PostgresReminderRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations. Already-applied migrations are skipped.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

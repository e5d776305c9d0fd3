use crate::repository::database::DbError;
use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

// embed diesel migrations
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Applies pending migrations over a blocking connection. Call from a
/// blocking task, never directly on the async runtime.
pub fn run_migrations(database_url: &str) -> Result<(), DbError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|e| DbError::MigrationError(e.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::MigrationError(e.to_string()))?;
    for version in &applied {
        info!("applied migration {}", version);
    }
    Ok(())
}

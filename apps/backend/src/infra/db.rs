use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

/// Connects to the configured database. Does NOT run migrations.
pub async fn connect_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    connect_url(&db_url(env, kind)?, kind).await
}

async fn connect_url(url: &str, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);
    if kind == DbKind::SqliteMemory {
        // Every pooled connection would otherwise see its own empty database.
        options.max_connections(1).min_connections(1);
    }
    Ok(Database::connect(options).await?)
}

/// Connects and brings the schema up to date.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind).await?;
    migrate_up(&conn).await?;
    info!(?env, ?kind, "Database ready");
    Ok(conn)
}

/// Fresh in-memory SQLite database with the schema applied.
pub async fn in_memory_db() -> Result<DatabaseConnection, AppError> {
    let conn = connect_url("sqlite::memory:", DbKind::SqliteMemory).await?;
    migrate_up(&conn).await?;
    Ok(conn)
}

async fn migrate_up(conn: &DatabaseConnection) -> Result<(), AppError> {
    migration::migrate(conn, migration::MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("Database migration failed: {e}")))
}

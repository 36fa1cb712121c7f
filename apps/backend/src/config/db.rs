use std::env;

use crate::error::AppError;

/// Which database set the process runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Enforces safety rules on the database name.
    Test,
}

/// Storage engine selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    /// Reads `DATABASE_KIND` (`postgres` | `sqlite-file` | `sqlite-memory`),
    /// defaulting to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DATABASE_KIND") {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Ok(DbKind::Postgres),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "DATABASE_KIND must be postgres, sqlite-file or sqlite-memory, got '{other}'"
            ))),
        }
    }
}

/// Builds a database URL from environment variables.
pub fn db_url(env: RuntimeEnv, kind: DbKind) -> Result<String, AppError> {
    db_url_from(env, kind, |name| env::var(name).ok())
}

/// Same as [`db_url`] with an explicit variable lookup.
pub fn db_url_from(
    env: RuntimeEnv,
    kind: DbKind,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    let must_var = |name: &str| {
        lookup(name).ok_or_else(|| {
            AppError::config(format!("Required environment variable '{name}' is not set"))
        })
    };

    match kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::SqliteFile => {
            let path = lookup("SQLITE_PATH").unwrap_or_else(|| match env {
                RuntimeEnv::Prod => "squares.db".to_string(),
                RuntimeEnv::Test => "squares_test.db".to_string(),
            });
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::Postgres => {
            let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = match env {
                RuntimeEnv::Prod => must_var("PROD_DB")?,
                RuntimeEnv::Test => {
                    let name = must_var("TEST_DB")?;
                    if !name.ends_with("_test") {
                        return Err(AppError::config(format!(
                            "Test environment requires database name to end with '_test', but got: '{name}'"
                        )));
                    }
                    name
                }
            };
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

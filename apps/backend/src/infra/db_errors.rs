//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here, and higher layers
//! then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Prefix of the `DbErr::Custom` payload adapters raise for a missing game.
pub const GAME_NOT_FOUND_PREFIX: &str = "GAME_NOT_FOUND:";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract `table.column` from SQLite "UNIQUE constraint failed: table.column" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..].split_whitespace().next()
}

fn unique_violation_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    let sqlite_target = extract_sqlite_table_column(error_msg);
    if sqlite_target == Some("user_codes.code") || error_msg.contains("user_codes_code_key") {
        return Some((ConflictKind::JoinCodeConflict, "Join code already exists"));
    }
    if matches!(sqlite_target, Some(t) if t.starts_with("quarter_results."))
        || error_msg.contains("ux_quarter_results_game_quarter")
    {
        return Some((
            ConflictKind::Other("QuarterResult".into()),
            "Result for this quarter was written concurrently",
        ));
    }
    if matches!(sqlite_target, Some(t) if t.starts_with("squares."))
        || error_msg.contains("ux_squares_game_row_col")
    {
        return Some((
            ConflictKind::Other("Square".into()),
            "Square already exists for this game",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(GAME_NOT_FOUND_PREFIX) => {
            return match msg[GAME_NOT_FOUND_PREFIX.len()..].parse::<i64>() {
                Ok(game_id) => DomainError::game_not_found(game_id),
                Err(_) => {
                    warn!(trace_id = %trace_id, raw_error = %Redacted(msg), "Failed to parse GAME_NOT_FOUND error");
                    DomainError::not_found(NotFoundKind::Game, "Game not found")
                }
            };
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        if let Some((kind, detail)) = unique_violation_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

//! Error codes for the squares backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the squares backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Invalid quarter number
    InvalidQuarter,
    /// Square coordinates outside the 10x10 grid
    InvalidSquare,
    /// Owner would hold more squares than allowed
    SquareLimitExceeded,
    /// Prize distribution has a negative amount
    InvalidPrizeDistribution,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Join code not found (or already used)
    JoinCodeNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// One or more squares are claimed by someone else
    SquaresTaken,
    /// Host has locked square selection
    GameLocked,
    /// Join code has already been redeemed
    JoinCodeUsed,
    /// Join code value already exists
    JoinCodeConflict,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Unique constraint violation
    UniqueViolation,
    /// Foreign key constraint violation
    FkViolation,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidQuarter => "INVALID_QUARTER",
            Self::InvalidSquare => "INVALID_SQUARE",
            Self::SquareLimitExceeded => "SQUARE_LIMIT_EXCEEDED",
            Self::InvalidPrizeDistribution => "INVALID_PRIZE_DISTRIBUTION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::JoinCodeNotFound => "JOIN_CODE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::SquaresTaken => "SQUARES_TAKEN",
            Self::GameLocked => "GAME_LOCKED",
            Self::JoinCodeUsed => "JOIN_CODE_USED",
            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Repository functions: adapter rows in, domain types out.

pub mod games;
pub mod quarter_results;
pub mod squares;
pub mod user_codes;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Narrowing conversion for stored integers; out-of-range values mean the row
/// is corrupted.
pub(crate) fn narrow<T, U>(value: T, what: &str) -> Result<U, DomainError>
where
    T: Copy + std::fmt::Display,
    U: TryFrom<T>,
{
    U::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Stored {what} out of range: {value}"),
        )
    })
}

//! Square repository functions.

use sea_orm::ConnectionTrait;

use super::narrow;
use crate::adapters::squares_sea::{self as squares_adapter, SquareClaim};
use crate::domain::claims::ClaimWrite;
use crate::domain::{Square, SquareId};
use crate::entities::squares;
use crate::errors::domain::DomainError;

pub(crate) fn square_from_row(row: squares::Model) -> Result<Square, DomainError> {
    let id = SquareId::new(narrow(row.row, "square row")?, narrow(row.col, "square col")?)?;
    Ok(Square {
        id,
        row: id.row,
        col: id.col,
        claimed: row.claimed,
        owner_name: row.owner_name,
        owner_initials: row.owner_initials,
    })
}

pub async fn insert_board<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board: &[Square],
) -> Result<(), DomainError> {
    let coordinates = board
        .iter()
        .map(|s| (i16::from(s.row), i16::from(s.col)));
    squares_adapter::insert_board(conn, game_id, coordinates).await?;
    Ok(())
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Square>, DomainError> {
    squares_adapter::list_for_game(conn, game_id)
        .await?
        .into_iter()
        .map(square_from_row)
        .collect()
}

/// Conditional claim; `false` means someone else got there first.
pub async fn claim_if_available<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    write: &ClaimWrite,
) -> Result<bool, DomainError> {
    let claimed = squares_adapter::claim_if_available(
        conn,
        SquareClaim {
            game_id,
            row: i16::from(write.id.row),
            col: i16::from(write.id.col),
            owner_name: write.owner_name.clone(),
            owner_initials: write.owner_initials.clone(),
        },
    )
    .await?;
    Ok(claimed)
}

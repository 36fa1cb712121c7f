//! Quarter result repository functions.

use sea_orm::ConnectionTrait;

use super::narrow;
use crate::adapters::quarter_results_sea::{self as results_adapter, QuarterResultUpsert};
use crate::domain::{Quarter, QuarterWinner, SquareId, Winner};
use crate::entities::quarter_results;
use crate::errors::domain::{DomainError, InfraErrorKind};

pub(crate) fn winner_from_row(row: quarter_results::Model) -> Result<QuarterWinner, DomainError> {
    let quarter = Quarter::try_from(row.quarter).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Stored quarter out of range: {}", row.quarter),
        )
    })?;
    let winning_square_id = row
        .winning_square_id
        .as_deref()
        .map(str::parse::<SquareId>)
        .transpose()
        .map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                "Stored winning square id is malformed",
            )
        })?;
    Ok(QuarterWinner {
        quarter,
        team1_score: narrow(row.team1_score, "team1 score")?,
        team2_score: narrow(row.team2_score, "team2 score")?,
        winning_square_id,
        winner: Winner::from_stored(row.winner_name),
        prize_cents: row.prize_cents,
    })
}

/// Writes the result of `winner.quarter`, replacing any earlier report for
/// the same quarter of this game.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    winner: &QuarterWinner,
) -> Result<QuarterWinner, DomainError> {
    let row = results_adapter::upsert(
        conn,
        QuarterResultUpsert {
            game_id,
            quarter: i16::from(winner.quarter),
            team1_score: i32::from(winner.team1_score),
            team2_score: i32::from(winner.team2_score),
            winning_square_id: winner.winning_square_id.map(|id| id.to_string()),
            winner_name: Some(winner.winner.name().to_string()),
            prize_cents: winner.prize_cents,
        },
    )
    .await?;
    winner_from_row(row)
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<QuarterWinner>, DomainError> {
    results_adapter::list_for_game(conn, game_id)
        .await?
        .into_iter()
        .map(winner_from_row)
        .collect()
}

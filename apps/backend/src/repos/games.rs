//! Game repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use super::narrow;
use super::{quarter_results, squares};
use crate::adapters::games_sea::{self as games_adapter, GameCreate, QuarterRecorded};
use crate::adapters::{quarter_results_sea, squares_sea, user_codes_sea};
use crate::domain::grid::empty_board;
use crate::domain::{DigitMap, Game, PrizeDistribution, Quarter, QuarterWinner, Square};
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Assembles the domain view from a game row and its child rows.
pub(crate) fn game_from_parts(
    row: games::Model,
    board: Vec<Square>,
    results: Vec<QuarterWinner>,
) -> Result<Game, DomainError> {
    let current_quarter = Quarter::try_from(row.current_quarter).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Stored current quarter out of range: {}", row.current_quarter),
        )
    })?;

    Ok(Game {
        id: row.id,
        host_id: row.host_id,
        host_name: row.host_name,
        title: row.title,
        team1: row.team1,
        team2: row.team2,
        squares: board,
        row_numbers: DigitMap::from_db_str(&row.row_digits)?,
        col_numbers: DigitMap::from_db_str(&row.col_digits)?,
        is_active: row.is_active,
        is_locked: row.is_locked,
        is_completed: row.is_completed,
        current_quarter,
        max_squares_per_user: narrow(row.max_squares_per_user, "max squares per user")?,
        prizes: PrizeDistribution {
            q1: row.prize_q1,
            q2: row.prize_q2,
            q3: row.prize_q3,
            final_score: row.prize_final,
        },
        scores: results.iter().map(QuarterWinner::score).collect(),
        quarter_winners: results,
        version: row.version,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

async fn hydrate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    row: games::Model,
) -> Result<Game, DomainError> {
    let board = squares::list_for_game(conn, row.id).await?;
    let results = quarter_results::list_for_game(conn, row.id).await?;
    game_from_parts(row, board, results)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    match games_adapter::find_by_id(conn, game_id).await? {
        Some(row) => Ok(Some(hydrate(conn, row).await?)),
        None => Ok(None),
    }
}

/// Load the full game or return `NotFound`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let row = games_adapter::require_game(conn, game_id).await?;
    hydrate(conn, row).await
}

/// Version of the game row without loading children.
pub async fn current_version<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<i32, DomainError> {
    Ok(games_adapter::require_game(conn, game_id).await?.version)
}

pub async fn list_by_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: &str,
    active_only: bool,
) -> Result<Vec<Game>, DomainError> {
    let rows = games_adapter::list_by_host(conn, host_id, active_only).await?;
    let mut games = Vec::with_capacity(rows.len());
    for row in rows {
        games.push(hydrate(conn, row).await?);
    }
    Ok(games)
}

/// Inserts the game row and its 100 unclaimed squares.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<Game, DomainError> {
    let row = games_adapter::create_game(conn, dto).await?;
    let board = empty_board();
    squares::insert_board(conn, row.id, &board).await?;
    game_from_parts(row, board, Vec::new())
}

pub async fn set_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    is_active: bool,
) -> Result<Game, DomainError> {
    let row = games_adapter::set_active(conn, game_id, is_active).await?;
    hydrate(conn, row).await
}

pub async fn set_locked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    is_locked: bool,
) -> Result<Game, DomainError> {
    let row = games_adapter::set_locked(conn, game_id, is_locked).await?;
    hydrate(conn, row).await
}

/// Bump the version after child rows changed and return the fresh view.
pub async fn touch_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let row = games_adapter::touch_game(conn, game_id).await?;
    hydrate(conn, row).await
}

/// Field-level game update after a quarter result was written.
pub async fn record_quarter<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    quarter: Quarter,
) -> Result<Game, DomainError> {
    let row = games_adapter::record_quarter(
        conn,
        QuarterRecorded {
            game_id,
            quarter: i16::from(quarter),
            completes: quarter.is_final(),
        },
    )
    .await?;
    hydrate(conn, row).await
}

/// Deletes the game with its join codes, squares and quarter results.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), DomainError> {
    user_codes_sea::delete_for_game(conn, game_id).await?;
    squares_sea::delete_for_game(conn, game_id).await?;
    quarter_results_sea::delete_for_game(conn, game_id).await?;
    if games_adapter::delete_game(conn, game_id).await? == 0 {
        return Err(DomainError::game_not_found(game_id));
    }
    Ok(())
}

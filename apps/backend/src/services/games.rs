//! Game lifecycle: create, read, list, flags, delete.

use serde::Deserialize;
use tracing::info;

use crate::adapters::games_sea::GameCreate;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::grid::TOTAL_SQUARES;
use crate::domain::{DigitMap, Game, PrizeDistribution};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::games;
use crate::state::app_state::AppState;

pub const DEFAULT_MAX_SQUARES_PER_USER: u32 = 5;

/// Input for [`create_game`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub host_id: String,
    pub host_name: String,
    pub title: String,
    pub team1: String,
    pub team2: String,
    #[serde(default)]
    pub max_squares_per_user: Option<u32>,
    #[serde(default)]
    pub prizes: Option<PrizeDistribution>,
}

fn required(value: String, field: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation_other(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_owned())
}

impl NewGame {
    fn into_create(self) -> Result<GameCreate, DomainError> {
        let max_squares = self
            .max_squares_per_user
            .unwrap_or(DEFAULT_MAX_SQUARES_PER_USER);
        if max_squares == 0 || max_squares > TOTAL_SQUARES {
            return Err(DomainError::validation_other(format!(
                "maxSquaresPerUser must be between 1 and {TOTAL_SQUARES}"
            )));
        }
        let prizes = self.prizes.unwrap_or_default();
        prizes.validate()?;

        Ok(GameCreate {
            host_id: required(self.host_id, "hostId")?,
            host_name: required(self.host_name, "hostName")?,
            title: required(self.title, "title")?,
            team1: required(self.team1, "team1")?,
            team2: required(self.team2, "team2")?,
            row_digits: DigitMap::random().to_db_string(),
            col_digits: DigitMap::random().to_db_string(),
            max_squares_per_user: max_squares as i32,
            prize_q1: prizes.q1,
            prize_q2: prizes.q2,
            prize_q3: prizes.q3,
            prize_final: prizes.final_score,
        })
    }
}

pub async fn create_game(state: &AppState, new_game: NewGame) -> Result<Game, AppError> {
    let dto = new_game.into_create()?;
    let game = with_txn(state, move |txn| {
        Box::pin(async move { Ok(games::create_game(txn, dto).await?) })
    })
    .await?;

    info!(game_id = game.id, host_id = %game.host_id, "Game created");
    Ok(game)
}

pub async fn get_game(state: &AppState, game_id: i64) -> Result<Game, AppError> {
    let db = require_db(state)?;
    Ok(games::require_game(db, game_id).await?)
}

pub async fn list_host_games(
    state: &AppState,
    host_id: &str,
    active_only: bool,
) -> Result<Vec<Game>, AppError> {
    if host_id.trim().is_empty() {
        return Err(DomainError::validation_other("host_id is required").into());
    }
    let db = require_db(state)?;
    Ok(games::list_by_host(db, host_id.trim(), active_only).await?)
}

pub async fn set_active(state: &AppState, game_id: i64, is_active: bool) -> Result<Game, AppError> {
    let game = with_txn(state, move |txn| {
        Box::pin(async move { Ok(games::set_active(txn, game_id, is_active).await?) })
    })
    .await?;

    info!(game_id, is_active, version = game.version, "Game active flag changed");
    state.hub().publish(game.clone());
    Ok(game)
}

pub async fn set_locked(state: &AppState, game_id: i64, is_locked: bool) -> Result<Game, AppError> {
    let game = with_txn(state, move |txn| {
        Box::pin(async move { Ok(games::set_locked(txn, game_id, is_locked).await?) })
    })
    .await?;

    info!(game_id, is_locked, version = game.version, "Game lock changed");
    state.hub().publish(game.clone());
    Ok(game)
}

pub async fn delete_game(state: &AppState, game_id: i64) -> Result<(), AppError> {
    with_txn(state, move |txn| {
        Box::pin(async move { Ok(games::delete_game(txn, game_id).await?) })
    })
    .await?;

    info!(game_id, "Game deleted");
    Ok(())
}

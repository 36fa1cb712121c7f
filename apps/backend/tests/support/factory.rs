//! Rows written straight through the repos so tests control every field,
//! including digit maps that the service would randomize.

use backend::adapters::games_sea::GameCreate;
use backend::domain::claims::ClaimWrite;
use backend::domain::{initials_for, Game, SquareId, GRID_SIZE};
use backend::repos::{games, squares};
use backend::state::app_state::AppState;

use super::test_state::db;

/// Digit `i` sits at position `i`, so the score digits are the coordinates.
pub const IDENTITY_DIGITS: &str = "0123456789";

pub const QUARTER_PRIZE_CENTS: i64 = 2_500;

pub fn game_create(max_squares_per_user: i32) -> GameCreate {
    GameCreate {
        host_id: "host-1".to_string(),
        host_name: "Hank Host".to_string(),
        title: "Big Game Pool".to_string(),
        team1: "Home".to_string(),
        team2: "Away".to_string(),
        row_digits: IDENTITY_DIGITS.to_string(),
        col_digits: IDENTITY_DIGITS.to_string(),
        max_squares_per_user,
        prize_q1: QUARTER_PRIZE_CENTS,
        prize_q2: QUARTER_PRIZE_CENTS,
        prize_q3: QUARTER_PRIZE_CENTS,
        prize_final: QUARTER_PRIZE_CENTS,
    }
}

/// Game with identity digit maps and no per-owner limit to speak of.
pub async fn identity_game(state: &AppState) -> Game {
    game_with_limit(state, 100).await
}

pub async fn game_with_limit(state: &AppState, max_squares_per_user: i32) -> Game {
    games::create_game(db(state), game_create(max_squares_per_user))
        .await
        .expect("create game")
}

pub fn square(row: u8, col: u8) -> SquareId {
    SquareId::new(row, col).expect("square on the grid")
}

/// Claims one square for `owner`, bypassing allowance checks.
pub async fn claim(state: &AppState, game_id: i64, id: SquareId, owner: &str) {
    let write = ClaimWrite {
        id,
        owner_name: owner.to_string(),
        owner_initials: initials_for(owner),
    };
    let claimed = squares::claim_if_available(db(state), game_id, &write)
        .await
        .expect("claim square");
    assert!(claimed, "square {id} was not available");
}

/// Claims the first `count` squares in row-major order for `owner`.
pub async fn claim_first(state: &AppState, game_id: i64, count: u32, owner: &str) {
    for n in 0..count {
        let row = (n / u32::from(GRID_SIZE)) as u8;
        let col = (n % u32::from(GRID_SIZE)) as u8;
        claim(state, game_id, square(row, col), owner).await;
    }
}

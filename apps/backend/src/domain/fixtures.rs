// Builders for in-memory games used by the domain tests.

use time::OffsetDateTime;

use crate::domain::grid::{empty_board, initials_for, DigitMap, SquareId};
use crate::domain::{Game, PrizeDistribution, Quarter};

/// Row digits 0..9 and column digits 0..9 in order, so digit `d` sits at
/// index `d` on both edges.
pub fn identity_map() -> DigitMap {
    DigitMap::from_digits([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap()
}

pub fn game_with_maps(row_numbers: DigitMap, col_numbers: DigitMap) -> Game {
    let now = OffsetDateTime::UNIX_EPOCH;
    Game {
        id: 1,
        host_id: "host-1".into(),
        host_name: "Host".into(),
        title: "Big Game".into(),
        team1: "Home".into(),
        team2: "Away".into(),
        squares: empty_board(),
        row_numbers,
        col_numbers,
        is_active: true,
        is_locked: false,
        is_completed: false,
        current_quarter: Quarter::Q1,
        max_squares_per_user: 5,
        prizes: PrizeDistribution::default(),
        scores: Vec::new(),
        quarter_winners: Vec::new(),
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

pub fn empty_game() -> Game {
    game_with_maps(identity_map(), identity_map())
}

/// Marks `id` as claimed by `owner`.
pub fn claim(game: &mut Game, id: SquareId, owner: &str) {
    let square = game
        .squares
        .iter_mut()
        .find(|s| s.id == id)
        .expect("square exists");
    square.claimed = true;
    square.owner_name = Some(owner.to_string());
    square.owner_initials = Some(initials_for(owner));
}

/// Claims the first `count` squares in row-major order, each by a distinct owner.
pub fn sell_first(game: &mut Game, count: usize) {
    let ids: Vec<SquareId> = game.squares.iter().take(count).map(|s| s.id).collect();
    for (i, id) in ids.into_iter().enumerate() {
        claim(game, id, &format!("Player {i}"));
    }
}

pub fn sq(row: u8, col: u8) -> SquareId {
    SquareId::new(row, col).unwrap()
}

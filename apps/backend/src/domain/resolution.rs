use tracing::warn;

use super::game::{Game, QuarterWinner, Score, Winner};
use super::grid::SquareId;
use super::payout::scaled_prize;

/// Decides the winner of one checkpoint from the current board.
///
/// Pure: the same game state and score always produce the same
/// [`QuarterWinner`].
pub fn resolve_quarter(game: &Game, score: Score) -> QuarterWinner {
    let (team1_digit, team2_digit) = score.last_digits();

    if !game.row_numbers.is_permutation() || !game.col_numbers.is_permutation() {
        warn!(
            game_id = game.id,
            row_numbers = %game.row_numbers.to_db_string(),
            col_numbers = %game.col_numbers.to_db_string(),
            "Resolving against a digit map that is not a permutation"
        );
    }

    let winning_square_id = match (
        game.row_numbers.position_of(team1_digit),
        game.col_numbers.position_of(team2_digit),
    ) {
        (Some(row), Some(col)) => Some(SquareId { row, col }),
        _ => None,
    };

    let owner = winning_square_id
        .and_then(|id| game.square_at(id))
        .and_then(|square| square.owner())
        .map(str::to_owned);

    let (winner, prize_cents) = match owner {
        Some(name) => {
            let configured = game.prizes.amount_for(score.quarter);
            (
                Winner::Player(name),
                scaled_prize(configured, game.squares_sold()),
            )
        }
        None => (Winner::NoWinner, 0),
    };

    QuarterWinner {
        quarter: score.quarter,
        team1_score: score.team1,
        team2_score: score.team2,
        winning_square_id,
        winner,
        prize_cents,
    }
}

//! Property tests for quarter resolution (pure domain, no DB).
//!
//! Properties tested:
//! - Resolving the same score twice yields equal results
//! - The winning square sits at the positions of the score's last digits
//! - A winner exists exactly when that square is sold
//! - The prize never exceeds the configured amount and scales with squares sold

use proptest::prelude::*;

use crate::domain::fixtures::game_with_maps;
use crate::domain::{resolve_quarter, test_gens, test_prelude, Score, SquareId};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_resolution_is_idempotent(
        rows in test_gens::digit_map(),
        cols in test_gens::digit_map(),
        mask in test_gens::sold_mask(),
        quarter in test_gens::quarter(),
        t1 in test_gens::team_score(),
        t2 in test_gens::team_score(),
    ) {
        let mut game = game_with_maps(rows, cols);
        for (square, sold) in game.squares.iter_mut().zip(&mask) {
            if *sold {
                square.claimed = true;
                square.owner_name = Some(format!("owner {}", square.id));
            }
        }
        let score = Score::new(quarter, t1, t2);
        prop_assert_eq!(resolve_quarter(&game, score), resolve_quarter(&game, score));
    }

    #[test]
    fn prop_winning_square_matches_digit_positions(
        rows in test_gens::digit_map(),
        cols in test_gens::digit_map(),
        mask in test_gens::sold_mask(),
        quarter in test_gens::quarter(),
        t1 in test_gens::team_score(),
        t2 in test_gens::team_score(),
    ) {
        let mut game = game_with_maps(rows, cols);
        for (square, sold) in game.squares.iter_mut().zip(&mask) {
            if *sold {
                square.claimed = true;
                square.owner_name = Some(format!("owner {}", square.id));
            }
        }
        let result = resolve_quarter(&game, Score::new(quarter, t1, t2));

        let id = result.winning_square_id.expect("permutations always locate a square");
        prop_assert_eq!(rows.digits()[id.row as usize], (t1 % 10) as u8);
        prop_assert_eq!(cols.digits()[id.col as usize], (t2 % 10) as u8);

        let sold = mask[(id.row as usize) * 10 + id.col as usize];
        prop_assert_eq!(result.winner.player().is_some(), sold);
        if sold {
            let expected_owner = format!("owner {}", SquareId { row: id.row, col: id.col });
            prop_assert_eq!(result.winner.player(), Some(expected_owner.as_str()));
        } else {
            prop_assert_eq!(result.prize_cents, 0);
        }
    }

    #[test]
    fn prop_prize_scales_with_squares_sold(
        rows in test_gens::digit_map(),
        cols in test_gens::digit_map(),
        sold_count in 1usize..=100,
        quarter in test_gens::quarter(),
        configured in 0i64..100_000,
    ) {
        let mut game = game_with_maps(rows, cols);
        game.prizes.q1 = configured;
        game.prizes.q2 = configured;
        game.prizes.q3 = configured;
        game.prizes.final_score = configured;
        // Sell everything, then find a score that lands on a sold square.
        for (i, square) in game.squares.iter_mut().enumerate() {
            if i < sold_count {
                square.claimed = true;
                square.owner_name = Some(format!("owner {i}"));
            }
        }
        let target = game.squares[0].id;
        let t1 = u16::from(rows.digits()[target.row as usize]);
        let t2 = u16::from(cols.digits()[target.col as usize]);

        let result = resolve_quarter(&game, Score::new(quarter, t1, t2));
        prop_assert!(result.prize_cents <= configured);
        prop_assert_eq!(result.prize_cents, configured * sold_count as i64 / 100);
    }
}

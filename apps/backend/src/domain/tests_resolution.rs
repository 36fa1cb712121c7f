use crate::domain::fixtures::{claim, empty_game, game_with_maps, sell_first, sq};
use crate::domain::grid::DigitMap;
use crate::domain::{resolve_quarter, Quarter, Score, Winner, NO_WINNER};

#[test]
fn winning_square_is_found_by_digit_positions() {
    // Team 1 digit 7 sits at row 2, team 2 digit 3 sits at col 5.
    let rows = DigitMap::from_digits([4, 1, 7, 0, 2, 9, 8, 6, 5, 3]).unwrap();
    let cols = DigitMap::from_digits([8, 0, 6, 1, 9, 3, 2, 4, 7, 5]).unwrap();
    let mut game = game_with_maps(rows, cols);
    claim(&mut game, sq(2, 5), "Ada Lovelace");

    let winner = resolve_quarter(&game, Score::new(Quarter::Q2, 17, 23));

    assert_eq!(winner.winning_square_id, Some(sq(2, 5)));
    assert_eq!(winner.winner, Winner::Player("Ada Lovelace".into()));
    assert_eq!(winner.team1_score, 17);
    assert_eq!(winner.team2_score, 23);
}

#[test]
fn sold_out_board_pays_the_configured_amount() {
    let mut game = empty_game();
    sell_first(&mut game, 100);

    let winner = resolve_quarter(&game, Score::new(Quarter::Q1, 7, 3));

    assert_eq!(winner.winning_square_id, Some(sq(7, 3)));
    assert_eq!(winner.prize_cents, game.prizes.q1);
    assert_eq!(winner.prize_cents, 2_500);
}

#[test]
fn half_sold_board_pays_half() {
    let mut game = empty_game();
    // Rows 0-4 sold.
    sell_first(&mut game, 50);

    let winner = resolve_quarter(&game, Score::new(Quarter::Q3, 14, 21));

    assert_eq!(winner.winning_square_id, Some(sq(4, 1)));
    assert!(winner.winner.player().is_some());
    assert_eq!(winner.prize_cents, 1_250);
}

#[test]
fn unsold_square_yields_no_winner_and_no_prize() {
    let mut game = empty_game();
    sell_first(&mut game, 50);

    let winner = resolve_quarter(&game, Score::new(Quarter::Q1, 7, 3));

    assert_eq!(winner.winning_square_id, Some(sq(7, 3)));
    assert_eq!(winner.winner, Winner::NoWinner);
    assert_eq!(winner.winner.name(), NO_WINNER);
    assert_eq!(winner.prize_cents, 0);
}

#[test]
fn digit_missing_from_a_corrupted_map_yields_no_winner() {
    let rows = DigitMap::from_digits([1, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let mut game = game_with_maps(rows, crate::domain::fixtures::identity_map());
    sell_first(&mut game, 100);

    let missing = resolve_quarter(&game, Score::new(Quarter::Q1, 10, 3));
    assert_eq!(missing.winning_square_id, None);
    assert_eq!(missing.winner, Winner::NoWinner);

    // Duplicate digit resolves to its first position.
    let dup = resolve_quarter(&game, Score::new(Quarter::Q1, 21, 3));
    assert_eq!(dup.winning_square_id, Some(sq(0, 3)));
}

#[test]
fn final_uses_the_final_prize() {
    let mut game = empty_game();
    game.prizes.final_score = 4_000;
    sell_first(&mut game, 100);

    let winner = resolve_quarter(&game, Score::new(Quarter::Final, 31, 28));
    assert_eq!(winner.prize_cents, 4_000);
}

#[test]
fn quarter_winner_serializes_with_sentinel_name() {
    let game = empty_game();
    let winner = resolve_quarter(&game, Score::new(Quarter::Q1, 0, 0));
    let json = serde_json::to_value(&winner).unwrap();
    assert_eq!(json["winnerName"], NO_WINNER);
    assert_eq!(json["quarter"], 1);
    assert_eq!(json["winningSquareId"], "0-0");
    assert_eq!(json["prizeCents"], 0);
}

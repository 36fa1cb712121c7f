use backend::adapters::games_sea;
use backend::adapters::quarter_results_sea::{self, QuarterResultUpsert};

use crate::support::factory::game_create;
use crate::support::test_state::{db, test_state};

fn result(game_id: i64, quarter: i16, team1: i32, team2: i32) -> QuarterResultUpsert {
    QuarterResultUpsert {
        game_id,
        quarter,
        team1_score: team1,
        team2_score: team2,
        winning_square_id: Some(format!("{}-{}", team1 % 10, team2 % 10)),
        winner_name: Some("Ada".to_string()),
        prize_cents: 2_500,
    }
}

#[tokio::test]
async fn upsert_replaces_the_row_for_the_same_quarter() {
    let (state, _) = test_state().await;
    let conn = db(&state);
    let game = games_sea::create_game(conn, game_create(100)).await.unwrap();

    let first = quarter_results_sea::upsert(conn, result(game.id, 1, 7, 3)).await.unwrap();
    let replaced = quarter_results_sea::upsert(conn, result(game.id, 1, 14, 3))
        .await
        .unwrap();

    assert_eq!(first.id, replaced.id);
    assert_eq!(replaced.team1_score, 14);
    assert_eq!(replaced.winning_square_id.as_deref(), Some("4-3"));
    assert_eq!(
        quarter_results_sea::list_for_game(conn, game.id).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn quarters_are_listed_in_order_and_independent() {
    let (state, _) = test_state().await;
    let conn = db(&state);
    let game = games_sea::create_game(conn, game_create(100)).await.unwrap();

    quarter_results_sea::upsert(conn, result(game.id, 3, 17, 10)).await.unwrap();
    quarter_results_sea::upsert(conn, result(game.id, 1, 7, 0)).await.unwrap();
    quarter_results_sea::upsert(conn, result(game.id, 1, 10, 0)).await.unwrap();

    let rows = quarter_results_sea::list_for_game(conn, game.id).await.unwrap();
    let quarters: Vec<i16> = rows.iter().map(|r| r.quarter).collect();
    assert_eq!(quarters, vec![1, 3]);
    assert_eq!(rows[1].team1_score, 17);
    assert!(quarter_results_sea::find(conn, game.id, 2).await.unwrap().is_none());
}

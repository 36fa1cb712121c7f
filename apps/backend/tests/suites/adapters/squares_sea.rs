use backend::adapters::games_sea;
use backend::adapters::squares_sea::{self, SquareClaim};

use crate::support::factory::game_create;
use crate::support::test_state::{db, test_state};

fn claim(game_id: i64, row: i16, col: i16, owner: &str) -> SquareClaim {
    SquareClaim {
        game_id,
        row,
        col,
        owner_name: owner.to_string(),
        owner_initials: owner.chars().take(1).collect(),
    }
}

#[tokio::test]
async fn claim_only_lands_on_free_or_own_squares() {
    let (state, _) = test_state().await;
    let conn = db(&state);
    let game = games_sea::create_game(conn, game_create(100)).await.unwrap();
    squares_sea::insert_board(conn, game.id, [(0, 0), (0, 1)]).await.unwrap();

    assert!(squares_sea::claim_if_available(conn, claim(game.id, 0, 0, "Ada"))
        .await
        .unwrap());
    // Same owner again still matches the row
    assert!(squares_sea::claim_if_available(conn, claim(game.id, 0, 0, "Ada"))
        .await
        .unwrap());
    // Someone else loses
    assert!(!squares_sea::claim_if_available(conn, claim(game.id, 0, 0, "Bob"))
        .await
        .unwrap());
    // Missing square matches nothing
    assert!(!squares_sea::claim_if_available(conn, claim(game.id, 9, 9, "Bob"))
        .await
        .unwrap());

    let board = squares_sea::list_for_game(conn, game.id).await.unwrap();
    assert_eq!(board.len(), 2);
    assert!(board[0].claimed);
    assert_eq!(board[0].owner_name.as_deref(), Some("Ada"));
    assert!(board[0].claimed_at.is_some());
    assert!(!board[1].claimed);
}

#[tokio::test]
async fn delete_for_game_removes_the_board() {
    let (state, _) = test_state().await;
    let conn = db(&state);
    let game = games_sea::create_game(conn, game_create(100)).await.unwrap();
    squares_sea::insert_board(conn, game.id, [(0, 0), (0, 1), (1, 0)])
        .await
        .unwrap();

    assert_eq!(squares_sea::delete_for_game(conn, game.id).await.unwrap(), 3);
    assert!(squares_sea::list_for_game(conn, game.id).await.unwrap().is_empty());
}

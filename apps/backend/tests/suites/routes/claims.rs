use actix_web::http::header::ETAG;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::app_builder::build_app;
use crate::support::factory::{claim, identity_game, square};
use crate::support::test_state::test_state;

#[actix_web::test]
async fn put_squares_claims_and_returns_the_new_version() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let app = build_app(state.clone()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{}/squares", game.id))
        .set_json(json!({
            "squares": [
                { "id": "3-4", "claimed": true, "ownerName": "Ada Lovelace" },
                { "id": "0-0", "claimed": false }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ETAG).unwrap().to_str().unwrap(),
        format!("\"game-{}-v2\"", game.id)
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "claimed": ["3-4"], "version": 2 }));
}

#[actix_web::test]
async fn conflict_lists_every_taken_square() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    claim(&state, game.id, square(1, 1), "Bob Builder").await;
    claim(&state, game.id, square(2, 2), "Bob Builder").await;
    let app = build_app(state.clone()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{}/squares", game.id))
        .set_json(json!({
            "squares": [
                { "id": "1-1", "claimed": true, "ownerName": "Ada Lovelace" },
                { "id": "0-5", "claimed": true, "ownerName": "Ada Lovelace" },
                { "id": "2-2", "claimed": true, "ownerName": "Ada Lovelace" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem(resp, "SQUARES_TAKEN", StatusCode::CONFLICT).await;
    assert_eq!(
        problem.square_ids,
        Some(vec!["1-1".to_string(), "2-2".to_string()])
    );
}

#[actix_web::test]
async fn locked_game_is_a_conflict() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let app = build_app(state.clone()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/lock", game.id))
        .set_json(json!({ "isLocked": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{}/squares", game.id))
        .set_json(json!({
            "squares": [{ "id": "0-0", "claimed": true, "ownerName": "Ada Lovelace" }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "GAME_LOCKED", StatusCode::CONFLICT).await;
}

#[actix_web::test]
async fn off_grid_square_is_rejected() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let app = build_app(state.clone()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{}/squares", game.id))
        .set_json(json!({
            "squares": [{ "id": "10-0", "claimed": true, "ownerName": "Ada Lovelace" }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST).await;
}

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::app_builder::build_app;
use crate::support::factory::identity_game;
use crate::support::test_state::test_state;

#[actix_web::test]
async fn join_code_lifecycle_over_http() {
    let (state, notifier) = test_state().await;
    let game = identity_game(&state).await;
    let app = build_app(state.clone()).await;

    // Generate with an invitation
    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/codes", game.id))
        .set_json(json!({
            "squaresAllowed": 3,
            "playerName": "Ada Lovelace",
            "playerEmail": "ada@example.com",
            "sendEmail": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let generated: Value = test::read_body_json(resp).await;
    assert_eq!(generated["invitation"]["status"], "sent");
    assert_eq!(generated["code"]["squaresAllowed"], 3);
    let code = generated["code"]["code"].as_str().unwrap().to_string();
    let id = generated["code"]["id"].as_i64().unwrap();
    assert_eq!(notifier.invitations().len(), 1);

    // Listed for the host
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/codes", game.id))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Lookup ignores case
    let req = test::TestRequest::get()
        .uri(&format!("/api/codes/{}", code.to_ascii_lowercase()))
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["gameId"], game.id);
    assert_eq!(found["isUsed"], false);

    // Edit
    let req = test::TestRequest::patch()
        .uri(&format!("/api/codes/by-id/{id}"))
        .set_json(json!({ "squaresAllowed": 7 }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["squaresAllowed"], 7);

    // Redeem once
    let req = test::TestRequest::post()
        .uri(&format!("/api/codes/{code}/redeem"))
        .set_json(json!({ "userName": "Ada Lovelace" }))
        .to_request();
    let redeemed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(redeemed["isUsed"], true);
    assert_eq!(redeemed["assignedUserName"], "Ada Lovelace");

    let req = test::TestRequest::post()
        .uri(&format!("/api/codes/{code}/redeem"))
        .set_json(json!({ "userName": "Bob Builder" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "JOIN_CODE_USED", StatusCode::CONFLICT).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/codes/{code}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "JOIN_CODE_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn retire_keeps_the_row_but_blocks_redemption() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let app = build_app(state.clone()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/codes", game.id))
        .set_json(json!({}))
        .to_request();
    let generated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(generated["invitation"]["status"], "not_requested");
    let id = generated["code"]["id"].as_i64().unwrap();
    let code = generated["code"]["code"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/codes/by-id/{id}"))
        .to_request();
    let retired: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(retired["isUsed"], true);

    let req = test::TestRequest::post()
        .uri(&format!("/api/codes/{code}/redeem"))
        .set_json(json!({ "userName": "Ada Lovelace" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "JOIN_CODE_USED", StatusCode::CONFLICT).await;
}

#[actix_web::test]
async fn codes_for_unknown_game_are_not_found() {
    let (state, _) = test_state().await;
    let app = build_app(state).await;

    let req = test::TestRequest::get().uri("/api/games/555/codes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::app_builder::build_app;
use crate::support::test_state::test_state;

fn create_body() -> Value {
    json!({
        "hostId": "host-1",
        "hostName": "Hank Host",
        "title": "Super Bowl",
        "team1": "Home",
        "team2": "Away",
        "maxSquaresPerUser": 10
    })
}

#[actix_web::test]
async fn create_returns_the_game_with_an_etag() {
    let (state, _) = test_state().await;
    let app = build_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(create_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let etag = resp.headers().get(ETAG).unwrap().to_str().unwrap().to_string();
    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_i64().unwrap();
    assert_eq!(etag, format!("\"game-{id}-v1\""));
    assert_eq!(body["squares"].as_array().unwrap().len(), 100);
    assert_eq!(body["rowNumbers"].as_array().unwrap().len(), 10);
    assert_eq!(body["maxSquaresPerUser"], 10);
    assert_eq!(body["currentQuarter"], 1);
    assert_eq!(body["prizes"]["final"], 2_500);
}

#[actix_web::test]
async fn get_honors_if_none_match() {
    let (state, _) = test_state().await;
    let app = build_app(state).await;
    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(create_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/games/{id}");

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let etag = resp.headers().get(ETAG).unwrap().to_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header((IF_NONE_MATCH, etag.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(resp.headers().get(ETAG).unwrap().to_str().unwrap(), etag);

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header((IF_NONE_MATCH, format!("\"game-{id}-v0\"")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn list_filters_by_host_and_activity() {
    let (state, _) = test_state().await;
    let app = build_app(state).await;
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/games")
            .set_json(create_body())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }
    let req = test::TestRequest::get()
        .uri("/api/games?host_id=host-1")
        .to_request();
    let games: Value = test::call_and_read_body_json(&app, req).await;
    let games = games.as_array().unwrap();
    assert_eq!(games.len(), 2);
    let first = games[0]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{first}/active"))
        .set_json(json!({ "isActive": false }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["isActive"], false);
    assert_eq!(updated["version"], 2);

    let req = test::TestRequest::get()
        .uri("/api/games?host_id=host-1&active_only=true")
        .to_request();
    let active: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(active.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/games?host_id=someone-else")
        .to_request();
    let none: Value = test::call_and_read_body_json(&app, req).await;
    assert!(none.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn delete_then_get_is_not_found() {
    let (state, _) = test_state().await;
    let app = build_app(state).await;
    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(create_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/games/{}", created["id"]);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_problem(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn lock_is_reported_in_the_game() {
    let (state, _) = test_state().await;
    let app = build_app(state).await;
    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(create_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/lock", created["id"]))
        .set_json(json!({ "isLocked": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isLocked"], true);
}

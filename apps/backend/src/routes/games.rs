//! Game routes under `/api/games`.

use actix_web::http::header::ETAG;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{DesiredSquare, Quarter, QuarterWinner, Score, SquareId};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameId, ValidatedJson};
use crate::http::etag::{game_etag, not_modified};
use crate::services::claims::submit_claims;
use crate::services::games::{self as game_service, NewGame};
use crate::services::scoring::report_score;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct ListGamesQuery {
    host_id: String,
    #[serde(default)]
    active_only: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActiveRequest {
    is_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LockRequest {
    is_locked: bool,
}

#[derive(Debug, Deserialize)]
struct ClaimsRequest {
    squares: Vec<DesiredSquare>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimsResponse {
    claimed: Vec<SquareId>,
    version: i32,
}

/// Scores arrive as plain integers so out-of-range values get a problem
/// response instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreRequest {
    quarter: i64,
    team1_score: i64,
    team2_score: i64,
}

impl ScoreRequest {
    fn into_score(self) -> Result<Score, AppError> {
        let quarter = u8::try_from(self.quarter)
            .ok()
            .and_then(|q| Quarter::try_from(q).ok())
            .ok_or_else(|| {
                AppError::bad_request(
                    ErrorCode::InvalidQuarter,
                    format!("Quarter must be between 1 and 4, got {}", self.quarter),
                )
            })?;
        let team_score = |value: i64, field: &str| {
            u16::try_from(value).map_err(|_| {
                AppError::bad_request(
                    ErrorCode::ValidationError,
                    format!("{field} must be a non-negative score, got {value}"),
                )
            })
        };
        Ok(Score::new(
            quarter,
            team_score(self.team1_score, "team1Score")?,
            team_score(self.team2_score, "team2Score")?,
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreResponse {
    winner: QuarterWinner,
    is_game_complete: bool,
    next_quarter: Option<Quarter>,
}

/// POST /api/games
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewGame>,
) -> Result<HttpResponse, AppError> {
    let game = game_service::create_game(&app_state, body.into_inner()).await?;
    Ok(HttpResponse::Created()
        .insert_header((ETAG, game_etag(game.id, game.version)))
        .json(game))
}

/// GET /api/games?host_id=..&active_only=..
async fn list_games(
    app_state: web::Data<AppState>,
    query: web::Query<ListGamesQuery>,
) -> Result<HttpResponse, AppError> {
    let games = game_service::list_host_games(&app_state, &query.host_id, query.active_only).await?;
    Ok(HttpResponse::Ok().json(games))
}

/// GET /api/games/{game_id}
///
/// Honors `If-None-Match` with `304 Not Modified`.
async fn get_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = game_service::get_game(&app_state, game_id.0).await?;
    let etag = game_etag(game.id, game.version);
    if let Some(resp) = not_modified(&http_req, &etag) {
        return Ok(resp);
    }
    Ok(HttpResponse::Ok().insert_header((ETAG, etag)).json(game))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    game_service::delete_game(&app_state, game_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/games/{game_id}/active
async fn set_active(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ActiveRequest>,
) -> Result<HttpResponse, AppError> {
    let game = game_service::set_active(&app_state, game_id.0, body.is_active).await?;
    Ok(HttpResponse::Ok()
        .insert_header((ETAG, game_etag(game.id, game.version)))
        .json(game))
}

/// POST /api/games/{game_id}/lock
async fn set_locked(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<LockRequest>,
) -> Result<HttpResponse, AppError> {
    let game = game_service::set_locked(&app_state, game_id.0, body.is_locked).await?;
    Ok(HttpResponse::Ok()
        .insert_header((ETAG, game_etag(game.id, game.version)))
        .json(game))
}

/// PUT /api/games/{game_id}/squares
///
/// Body is the caller's whole desired board; see [`submit_claims`].
async fn put_squares(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ClaimsRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = submit_claims(&app_state, game_id.0, body.into_inner().squares).await?;
    let game = &outcome.game;
    Ok(HttpResponse::Ok()
        .insert_header((ETAG, game_etag(game.id, game.version)))
        .json(ClaimsResponse {
            version: game.version,
            claimed: outcome.claimed,
        }))
}

/// POST /api/games/{game_id}/scores
async fn post_score(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let score = body.into_inner().into_score()?;
    let report = report_score(&app_state, game_id.0, score).await?;
    Ok(HttpResponse::Ok()
        .insert_header((ETAG, game_etag(report.game.id, report.game.version)))
        .json(ScoreResponse {
            winner: report.winner,
            is_game_complete: report.is_game_complete,
            next_quarter: report.next_quarter,
        }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_game))
            .route(web::get().to(list_games)),
    )
    .service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::delete().to(delete_game)),
    )
    .service(web::resource("/{game_id}/active").route(web::post().to(set_active)))
    .service(web::resource("/{game_id}/lock").route(web::post().to(set_locked)))
    .service(web::resource("/{game_id}/squares").route(web::put().to(put_squares)))
    .service(web::resource("/{game_id}/scores").route(web::post().to(post_score)));
}

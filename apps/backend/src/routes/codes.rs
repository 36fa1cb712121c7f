//! Join code routes: per-game listing and generation under
//! `/api/games/{game_id}/codes`, everything else under `/api/codes`.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::services::codes::{self as code_service, JoinCodeChanges, NewJoinCode};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RedeemRequest {
    user_name: String,
}

/// GET /api/games/{game_id}/codes
async fn list_codes(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let codes = code_service::list_codes(&app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(codes))
}

/// POST /api/games/{game_id}/codes
async fn generate_code(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewJoinCode>,
) -> Result<HttpResponse, AppError> {
    let generated = code_service::generate_code(&app_state, game_id.0, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(generated))
}

/// GET /api/codes/{code}
async fn find_code(
    code: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let found = code_service::find_active_code(&app_state, &code).await?;
    Ok(HttpResponse::Ok().json(found))
}

/// POST /api/codes/{code}/redeem
async fn redeem_code(
    code: web::Path<String>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RedeemRequest>,
) -> Result<HttpResponse, AppError> {
    let redeemed = code_service::redeem_code(&app_state, &code, &body.user_name).await?;
    Ok(HttpResponse::Ok().json(redeemed))
}

/// PATCH /api/codes/by-id/{id}
async fn update_code(
    id: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<JoinCodeChanges>,
) -> Result<HttpResponse, AppError> {
    let updated = code_service::update_code(&app_state, id.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/codes/by-id/{id}
async fn retire_code(
    id: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let retired = code_service::retire_code(&app_state, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(retired))
}

/// Mounted inside the `/api/games` scope.
pub fn configure_game_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{game_id}/codes")
            .route(web::get().to(list_codes))
            .route(web::post().to(generate_code)),
    );
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/by-id/{id}")
            .route(web::patch().to(update_code))
            .route(web::delete().to(retire_code)),
    )
    .service(web::resource("/{code}").route(web::get().to(find_code)))
    .service(web::resource("/{code}/redeem").route(web::post().to(redeem_code)));
}

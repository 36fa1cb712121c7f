use actix_web::{web, HttpRequest, HttpResponse};

use crate::extractors::GameId;
use crate::services::games;
use crate::state::app_state::AppState;
use crate::ws::session;

/// GET /api/games/{game_id}/live
///
/// Upgrades to a websocket streaming `game_state` messages for one game.
async fn live(
    req: HttpRequest,
    stream: web::Payload,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    // Unknown games get a problem response instead of an upgrade.
    games::get_game(&app_state, game_id.0).await?;
    session::upgrade(req, stream, game_id.0, app_state).await
}

/// Mounted inside the `/api/games` scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{game_id}/live").route(web::get().to(live)));
}


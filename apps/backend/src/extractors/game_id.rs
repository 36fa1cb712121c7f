use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive game id taken from the `{game_id}` path segment.
///
/// Existence is checked by the service that loads the game.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl GameId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let game_id = raw.parse::<i64>().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
        })?;
        if game_id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                format!("Game id must be positive, got: {game_id}"),
            ));
        }
        Ok(GameId(game_id))
    }
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = match req.match_info().get("game_id") {
            Some(raw) => GameId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                "Missing game_id parameter",
            )),
        };
        std::future::ready(parsed)
    }
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::Game;
use crate::error::AppError;
use crate::services::games;
use crate::state::app_state::AppState;
use crate::ws::hub::GameBroadcast;
use crate::ws::protocol::{ClientMsg, ErrorCode, ServerMsg, PROTOCOL_VERSION};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// Starts a websocket session watching one game.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    game_id: i64,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = WsSession::new(game_id, app_state);
    ws::start(session, &req, stream)
}

fn is_newer(sent: Option<i32>, version: i32) -> bool {
    !matches!(sent, Some(sent) if sent >= version)
}

pub struct WsSession {
    game_id: i64,
    app_state: web::Data<AppState>,
    /// Hub registration, set once the actor has started.
    token: Option<Uuid>,

    last_heartbeat: Instant,
    hello_done: bool,
    /// Highest game version delivered; older snapshots or broadcasts are dropped.
    sent_version: Option<i32>,
}

impl WsSession {
    fn new(game_id: i64, app_state: web::Data<AppState>) -> Self {
        Self {
            game_id,
            app_state,
            token: None,
            last_heartbeat: Instant::now(),
            hello_done: false,
            sent_version: None,
        }
    }

    /// Sends a game state unless the client already has this version or newer.
    fn send_game_state(
        &mut self,
        ctx: &mut ws::WebsocketContext<Self>,
        version: i32,
        game: Arc<Game>,
    ) {
        if !is_newer(self.sent_version, version) {
            return;
        }
        self.sent_version = Some(version);
        Self::send_json(
            ctx,
            &ServerMsg::GameState {
                game_id: self.game_id,
                version,
                game,
            },
        );
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error_and_close(
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let msg = ServerMsg::Error {
            code,
            message: message.into(),
        };
        Self::send_json(ctx, &msg);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(game_id = actor.game_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    /// Sends the current game right after the handshake.
    fn send_snapshot(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let app_state = self.app_state.clone();
        let game_id = self.game_id;

        ctx.spawn(
            async move { games::get_game(&app_state, game_id).await }
                .into_actor(self)
                .map(move |res: Result<Game, AppError>, actor, ctx| match res {
                    Ok(game) => actor.send_game_state(ctx, game.version, game.into()),
                    Err(err) => {
                        warn!(game_id, error = %err, "[WS SESSION] snapshot failed");
                        Self::send_error_and_close(
                            ctx,
                            ErrorCode::GameUnavailable,
                            err.to_string(),
                        );
                    }
                }),
        );
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let recipient = ctx.address().recipient::<GameBroadcast>();
        self.token = Some(self.app_state.hub().register(self.game_id, recipient));
        info!(game_id = self.game_id, "[WS SESSION] started");
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(token) = self.token.take() {
            self.app_state.hub().unregister(self.game_id, token);
        }
        info!(game_id = self.game_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let Ok(ClientMsg::Hello { protocol }) = serde_json::from_str::<ClientMsg>(&text)
                else {
                    Self::send_error_and_close(ctx, ErrorCode::BadRequest, "Malformed JSON");
                    return;
                };
                if protocol != PROTOCOL_VERSION {
                    Self::send_error_and_close(
                        ctx,
                        ErrorCode::BadProtocol,
                        "Unsupported protocol version",
                    );
                    return;
                }
                if self.hello_done {
                    return;
                }
                self.hello_done = true;
                Self::send_json(
                    ctx,
                    &ServerMsg::HelloAck {
                        protocol: PROTOCOL_VERSION,
                        game_id: self.game_id,
                    },
                );
                self.send_snapshot(ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                Self::send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(game_id = self.game_id, error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<GameBroadcast> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: GameBroadcast, ctx: &mut Self::Context) -> Self::Result {
        // Updates start flowing after the handshake.
        if !self.hello_done {
            return;
        }
        self.send_game_state(ctx, msg.version, msg.game);
    }
}

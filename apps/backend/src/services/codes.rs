//! Join codes: generation with optional invitation email, lookup, one-time
//! redemption, edits and retirement.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::adapters::user_codes_sea::{UserCodeCreate, UserCodeUpdate};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::grid::TOTAL_SQUARES;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::notify::{invitation_url, MailDraft, PlayerInvitation};
use crate::repos::games;
use crate::repos::user_codes::{self, JoinCode};
use crate::state::app_state::AppState;
use crate::utils::join_code::{generate_join_code, is_well_formed};

pub const DEFAULT_SQUARES_ALLOWED: u32 = 5;

/// Fresh codes tried before giving up on a collision streak.
const MAX_CODE_ATTEMPTS: usize = 8;

/// Input for [`generate_code`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJoinCode {
    #[serde(default)]
    pub squares_allowed: Option<u32>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub player_email: Option<String>,
    #[serde(default)]
    pub send_email: bool,
}

/// Input for [`update_code`]; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCodeChanges {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub player_email: Option<String>,
    #[serde(default)]
    pub squares_allowed: Option<u32>,
}

/// What happened to the invitation email of a generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvitationStatus {
    NotRequested,
    Sent,
    /// Delivery failed; the host can send this draft by hand.
    Failed {
        #[serde(rename = "mailtoUrl")]
        mailto_url: String,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    pub code: JoinCode,
    pub game_url: String,
    pub invitation: InvitationStatus,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn check_squares_allowed(allowed: u32) -> Result<i32, DomainError> {
    if allowed == 0 || allowed > TOTAL_SQUARES {
        return Err(DomainError::validation_other(format!(
            "squaresAllowed must be between 1 and {TOTAL_SQUARES}"
        )));
    }
    Ok(allowed as i32)
}

fn unknown_code(code: &str) -> DomainError {
    DomainError::not_found(
        NotFoundKind::JoinCode,
        format!("No active join code {code}"),
    )
}

/// Creates a unique code for the game and, when asked and possible, emails
/// the invitation. Email failure never fails the call.
pub async fn generate_code(
    state: &AppState,
    game_id: i64,
    request: NewJoinCode,
) -> Result<GeneratedCode, AppError> {
    let squares_allowed =
        check_squares_allowed(request.squares_allowed.unwrap_or(DEFAULT_SQUARES_ALLOWED))?;
    let player_name = non_blank(request.player_name);
    let player_email = non_blank(request.player_email);

    let create_name = player_name.clone();
    let create_email = player_email.clone();
    let (game, code) = with_txn(state, move |txn| {
        Box::pin(async move {
            let game = games::require_game(txn, game_id).await?;
            for _ in 0..MAX_CODE_ATTEMPTS {
                let candidate = generate_join_code();
                if user_codes::find_by_code(txn, &candidate).await?.is_some() {
                    continue;
                }
                let code = user_codes::create(
                    txn,
                    UserCodeCreate {
                        game_id,
                        code: candidate,
                        squares_allowed,
                        player_name: create_name,
                        player_email: create_email,
                    },
                )
                .await?;
                return Ok((game, code));
            }
            Err(DomainError::conflict(
                ConflictKind::JoinCodeConflict,
                "Could not find an unused join code, try again",
            )
            .into())
        })
    })
    .await?;

    info!(game_id, code_id = code.id, "Join code generated");

    let game_url = invitation_url(&state.config.public_base_url, game_id, &code.code);
    let invitation = match (request.send_email, player_name, player_email) {
        (true, Some(player_name), Some(player_email)) => {
            let invitation = PlayerInvitation {
                player_name,
                player_email,
                game_title: game.title.clone(),
                host_name: game.host_name.clone(),
                join_code: code.code.clone(),
                game_url: game_url.clone(),
            };
            match state.notifier.send_invitation(&invitation).await {
                Ok(()) => {
                    info!(
                        game_id,
                        to = %Redacted(&invitation.player_email),
                        "Invitation sent"
                    );
                    InvitationStatus::Sent
                }
                Err(err) => {
                    warn!(game_id, error = %err, "Invitation email failed");
                    InvitationStatus::Failed {
                        mailto_url: MailDraft::invitation(&invitation).mailto_url(),
                    }
                }
            }
        }
        _ => InvitationStatus::NotRequested,
    };

    Ok(GeneratedCode {
        code,
        game_url,
        invitation,
    })
}

pub async fn list_codes(state: &AppState, game_id: i64) -> Result<Vec<JoinCode>, AppError> {
    let db = require_db(state)?;
    games::current_version(db, game_id).await?;
    Ok(user_codes::list_for_game(db, game_id).await?)
}

/// Unused code by value, case-insensitively.
pub async fn find_active_code(state: &AppState, code: &str) -> Result<JoinCode, AppError> {
    if !is_well_formed(code) {
        return Err(unknown_code(code).into());
    }
    let db = require_db(state)?;
    match user_codes::find_by_code(db, code).await? {
        Some(found) if !found.is_used => Ok(found),
        _ => Err(unknown_code(code).into()),
    }
}

/// One-time redemption binding the code to `user_name`.
pub async fn redeem_code(
    state: &AppState,
    code: &str,
    user_name: &str,
) -> Result<JoinCode, AppError> {
    let user_name = user_name.trim().to_owned();
    if user_name.is_empty() {
        return Err(DomainError::validation_other("userName must not be empty").into());
    }
    let code = code.to_owned();

    let redeemed = with_txn(state, move |txn| {
        Box::pin(async move {
            let found = user_codes::find_by_code(txn, &code)
                .await?
                .ok_or_else(|| unknown_code(&code))?;
            let already_used = || {
                DomainError::conflict(
                    ConflictKind::JoinCodeUsed,
                    format!("Join code {} has already been used", found.code),
                )
            };
            if found.is_used {
                return Err(already_used().into());
            }
            if !user_codes::mark_used(txn, found.id, Some(user_name)).await? {
                return Err(already_used().into());
            }
            Ok(user_codes::require_by_id(txn, found.id).await?)
        })
    })
    .await?;

    info!(game_id = redeemed.game_id, code_id = redeemed.id, "Join code redeemed");
    Ok(redeemed)
}

pub async fn update_code(
    state: &AppState,
    id: i64,
    changes: JoinCodeChanges,
) -> Result<JoinCode, AppError> {
    let mut update = UserCodeUpdate::new(id);
    update.player_name = non_blank(changes.player_name);
    update.player_email = non_blank(changes.player_email);
    update.squares_allowed = changes
        .squares_allowed
        .map(check_squares_allowed)
        .transpose()?;

    let updated = with_txn(state, move |txn| {
        Box::pin(async move { Ok(user_codes::update(txn, update).await?) })
    })
    .await?;

    info!(game_id = updated.game_id, code_id = id, "Join code updated");
    Ok(updated)
}

/// Marks the code used so it can no longer be redeemed. The row is kept.
pub async fn retire_code(state: &AppState, id: i64) -> Result<JoinCode, AppError> {
    let retired = with_txn(state, move |txn| {
        Box::pin(async move {
            let code = user_codes::require_by_id(txn, id).await?;
            if code.is_used {
                return Ok(code);
            }
            user_codes::mark_used(txn, id, None).await?;
            Ok(user_codes::require_by_id(txn, id).await?)
        })
    })
    .await?;

    info!(game_id = retired.game_id, code_id = id, "Join code retired");
    Ok(retired)
}

//! Join code repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use super::narrow;
use crate::adapters::user_codes_sea::{self as codes_adapter, UserCodeCreate, UserCodeUpdate};
use crate::entities::user_codes;
use crate::utils::join_code::normalize_join_code;
use crate::errors::domain::{DomainError, NotFoundKind};

/// One-time token that lets a player join a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCode {
    pub id: i64,
    pub game_id: i64,
    pub code: String,
    pub squares_allowed: u32,
    pub player_name: Option<String>,
    pub player_email: Option<String>,
    pub is_used: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub used_at: Option<OffsetDateTime>,
    pub assigned_user_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl TryFrom<user_codes::Model> for JoinCode {
    type Error = DomainError;

    fn try_from(row: user_codes::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            game_id: row.game_id,
            code: row.code,
            squares_allowed: narrow(row.squares_allowed, "squares allowed")?,
            player_name: row.player_name,
            player_email: row.player_email,
            is_used: row.is_used,
            used_at: row.used_at,
            assigned_user_name: row.assigned_user_name,
            created_at: row.created_at,
        })
    }
}

fn code_not_found(detail: impl Into<String>) -> DomainError {
    DomainError::not_found(NotFoundKind::JoinCode, detail)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCodeCreate,
) -> Result<JoinCode, DomainError> {
    JoinCode::try_from(codes_adapter::create(conn, dto).await?)
}

pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<JoinCode, DomainError> {
    let row = codes_adapter::find_by_id(conn, id)
        .await?
        .ok_or_else(|| code_not_found(format!("Join code {id} not found")))?;
    JoinCode::try_from(row)
}

/// Case-insensitive lookup by code value, used or not.
pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<JoinCode>, DomainError> {
    let normalized = normalize_join_code(code);
    codes_adapter::find_by_code(conn, &normalized)
        .await?
        .map(JoinCode::try_from)
        .transpose()
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<JoinCode>, DomainError> {
    codes_adapter::list_for_game(conn, game_id)
        .await?
        .into_iter()
        .map(JoinCode::try_from)
        .collect()
}

/// One-time transition to used. `false` when another redeem won the race.
pub async fn mark_used<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    assigned_user_name: Option<String>,
) -> Result<bool, DomainError> {
    Ok(codes_adapter::mark_used(conn, id, assigned_user_name).await?)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCodeUpdate,
) -> Result<JoinCode, DomainError> {
    let id = dto.id;
    match codes_adapter::update(conn, dto).await {
        Ok(row) => JoinCode::try_from(row),
        Err(sea_orm::DbErr::RecordNotFound(_)) => {
            Err(code_not_found(format!("Join code {id} not found")))
        }
        Err(e) => Err(e.into()),
    }
}

/// Allowance of the code `user_name` redeemed for this game, if any.
pub async fn redeemed_allowance<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_name: &str,
) -> Result<Option<u32>, DomainError> {
    match codes_adapter::find_redeemed_by(conn, game_id, user_name).await? {
        Some(row) => Ok(Some(narrow(row.squares_allowed, "squares allowed")?)),
        None => Ok(None),
    }
}

/// Email on file for a player of this game.
pub async fn contact_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player: &str,
) -> Result<Option<String>, DomainError> {
    Ok(codes_adapter::find_contact_for(conn, game_id, player)
        .await?
        .and_then(|row| row.player_email)
        .filter(|email| !email.trim().is_empty()))
}

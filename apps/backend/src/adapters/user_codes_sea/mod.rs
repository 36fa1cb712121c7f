//! SeaORM adapter for join codes - generic over ConnectionTrait.

use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::user_codes;

pub mod dto;

pub use dto::{UserCodeCreate, UserCodeUpdate};

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCodeCreate,
) -> Result<user_codes::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = user_codes::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        code: Set(dto.code),
        squares_allowed: Set(dto.squares_allowed),
        player_name: Set(dto.player_name),
        player_email: Set(dto.player_email),
        is_used: Set(false),
        used_at: Set(None),
        assigned_user_name: Set(None),
        created_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<user_codes::Model>, sea_orm::DbErr> {
    user_codes::Entity::find_by_id(id).one(conn).await
}

/// Lookup by code value; `code` must already be uppercased.
pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<user_codes::Model>, sea_orm::DbErr> {
    user_codes::Entity::find()
        .filter(user_codes::Column::Code.eq(code))
        .one(conn)
        .await
}

/// Codes of one game, newest first.
pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<user_codes::Model>, sea_orm::DbErr> {
    user_codes::Entity::find()
        .filter(user_codes::Column::GameId.eq(game_id))
        .order_by_desc(user_codes::Column::CreatedAt)
        .order_by_desc(user_codes::Column::Id)
        .all(conn)
        .await
}

/// Flips `is_used` false -> true. Returns false when the code was already used.
pub async fn mark_used<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    assigned_user_name: Option<String>,
) -> Result<bool, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut update = user_codes::Entity::update_many()
        .col_expr(user_codes::Column::IsUsed, Expr::value(true))
        .col_expr(user_codes::Column::UsedAt, Expr::value(Some(now)));
    if let Some(name) = assigned_user_name {
        update = update.col_expr(user_codes::Column::AssignedUserName, Expr::value(Some(name)));
    }
    let result = update
        .filter(user_codes::Column::Id.eq(id))
        .filter(user_codes::Column::IsUsed.eq(false))
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCodeUpdate,
) -> Result<user_codes::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, dto.id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("user_codes.id {}", dto.id)))?;

    if dto.is_empty() {
        return Ok(existing);
    }

    let mut active: user_codes::ActiveModel = existing.into();
    if let Some(name) = dto.player_name {
        active.player_name = Set(Some(name));
    }
    if let Some(email) = dto.player_email {
        active.player_email = Set(Some(email));
    }
    if let Some(allowed) = dto.squares_allowed {
        active.squares_allowed = Set(allowed);
    }
    active.update(conn).await
}

/// The used code a player redeemed for this game, if any.
pub async fn find_redeemed_by<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_name: &str,
) -> Result<Option<user_codes::Model>, sea_orm::DbErr> {
    user_codes::Entity::find()
        .filter(user_codes::Column::GameId.eq(game_id))
        .filter(user_codes::Column::IsUsed.eq(true))
        .filter(user_codes::Column::AssignedUserName.eq(user_name))
        .order_by_desc(user_codes::Column::UsedAt)
        .one(conn)
        .await
}

/// A code of this game that belongs to `player` (redeemed under that name or
/// pre-assigned to it) and carries an email address.
pub async fn find_contact_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player: &str,
) -> Result<Option<user_codes::Model>, sea_orm::DbErr> {
    let belongs = Condition::any()
        .add(user_codes::Column::AssignedUserName.eq(player))
        .add(user_codes::Column::PlayerName.eq(player));

    user_codes::Entity::find()
        .filter(user_codes::Column::GameId.eq(game_id))
        .filter(user_codes::Column::PlayerEmail.is_not_null())
        .filter(belongs)
        .order_by_desc(user_codes::Column::IsUsed)
        .order_by_asc(user_codes::Column::Id)
        .one(conn)
        .await
}

pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = user_codes::Entity::delete_many()
        .filter(user_codes::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set, UpdateMany,
};

use crate::entities::games;
use crate::infra::db_errors::GAME_NOT_FOUND_PREFIX;

pub mod dto;

pub use dto::{GameCreate, QuarterRecorded};

// Adapter functions return DbErr; repos map to DomainError via From<DbErr>.

fn game_not_found(game_id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("{GAME_NOT_FOUND_PREFIX}{game_id}"))
}

/// Applies the caller's column updates plus `version + 1` and `updated_at`,
/// then refetches. Zero affected rows means the game does not exist.
async fn touch_then_fetch<C, F>(
    conn: &C,
    game_id: i64,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(UpdateMany<games::Entity>) -> UpdateMany<games::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::value(now))
        .col_expr(games::Column::Version, Expr::col(games::Column::Version).add(1))
        .filter(games::Column::Id.eq(game_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(game_not_found(game_id));
    }

    require_game(conn, game_id).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or return a GAME_NOT_FOUND error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

/// Games of one host, newest first.
pub async fn list_by_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: &str,
    active_only: bool,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    let mut query = games::Entity::find().filter(games::Column::HostId.eq(host_id));
    if active_only {
        query = query.filter(games::Column::IsActive.eq(true));
    }
    query
        .order_by_desc(games::Column::CreatedAt)
        .order_by_desc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        host_id: Set(dto.host_id),
        host_name: Set(dto.host_name),
        title: Set(dto.title),
        team1: Set(dto.team1),
        team2: Set(dto.team2),
        row_digits: Set(dto.row_digits),
        col_digits: Set(dto.col_digits),
        is_active: Set(true),
        is_locked: Set(false),
        is_completed: Set(false),
        current_quarter: Set(1),
        max_squares_per_user: Set(dto.max_squares_per_user),
        prize_q1: Set(dto.prize_q1),
        prize_q2: Set(dto.prize_q2),
        prize_q3: Set(dto.prize_q3),
        prize_final: Set(dto.prize_final),
        created_at: Set(now),
        updated_at: Set(now),
        version: Set(1),
    };

    game_active.insert(conn).await
}

pub async fn set_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    is_active: bool,
) -> Result<games::Model, sea_orm::DbErr> {
    touch_then_fetch(conn, game_id, |update| {
        update.col_expr(games::Column::IsActive, Expr::value(is_active))
    })
    .await
}

pub async fn set_locked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    is_locked: bool,
) -> Result<games::Model, sea_orm::DbErr> {
    touch_then_fetch(conn, game_id, |update| {
        update.col_expr(games::Column::IsLocked, Expr::value(is_locked))
    })
    .await
}

/// Bump version without changing any game field, for changes that live in
/// child tables (squares, quarter results).
pub async fn touch_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    touch_then_fetch(conn, game_id, |update| update).await
}

/// Records that a quarter result was written, with field-level updates only.
pub async fn record_quarter<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuarterRecorded,
) -> Result<games::Model, sea_orm::DbErr> {
    // Raise current_quarter only when the new one is later; a re-report of
    // an earlier quarter leaves it alone.
    games::Entity::update_many()
        .col_expr(games::Column::CurrentQuarter, Expr::value(dto.quarter))
        .filter(games::Column::Id.eq(dto.game_id))
        .filter(games::Column::CurrentQuarter.lt(dto.quarter))
        .exec(conn)
        .await?;

    touch_then_fetch(conn, dto.game_id, |update| {
        if dto.completes {
            update.col_expr(games::Column::IsCompleted, Expr::value(true))
        } else {
            update
        }
    })
    .await
}

pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_many()
        .filter(games::Column::Id.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

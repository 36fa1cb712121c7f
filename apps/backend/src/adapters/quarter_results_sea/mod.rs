//! SeaORM adapter for per-quarter results - generic over ConnectionTrait.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::quarter_results;

pub mod dto;

pub use dto::QuarterResultUpsert;

/// Insert or replace the result keyed by `(game_id, quarter)` in one
/// statement, then return the stored row.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuarterResultUpsert,
) -> Result<quarter_results::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let (game_id, quarter) = (dto.game_id, dto.quarter);

    let active = quarter_results::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        quarter: Set(dto.quarter),
        team1_score: Set(dto.team1_score),
        team2_score: Set(dto.team2_score),
        winning_square_id: Set(dto.winning_square_id),
        winner_name: Set(dto.winner_name),
        prize_cents: Set(dto.prize_cents),
        reported_at: Set(now),
    };

    quarter_results::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([
                quarter_results::Column::GameId,
                quarter_results::Column::Quarter,
            ])
            .update_columns([
                quarter_results::Column::Team1Score,
                quarter_results::Column::Team2Score,
                quarter_results::Column::WinningSquareId,
                quarter_results::Column::WinnerName,
                quarter_results::Column::PrizeCents,
                quarter_results::Column::ReportedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find(conn, game_id, quarter).await?.ok_or_else(|| {
        sea_orm::DbErr::RecordNotFound("quarter_results row missing after upsert".to_string())
    })
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    quarter: i16,
) -> Result<Option<quarter_results::Model>, sea_orm::DbErr> {
    quarter_results::Entity::find()
        .filter(quarter_results::Column::GameId.eq(game_id))
        .filter(quarter_results::Column::Quarter.eq(quarter))
        .one(conn)
        .await
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<quarter_results::Model>, sea_orm::DbErr> {
    quarter_results::Entity::find()
        .filter(quarter_results::Column::GameId.eq(game_id))
        .order_by_asc(quarter_results::Column::Quarter)
        .all(conn)
        .await
}

pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = quarter_results::Entity::delete_many()
        .filter(quarter_results::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

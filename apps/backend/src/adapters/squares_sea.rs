//! SeaORM adapter for the squares table - generic over ConnectionTrait.

use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::squares;

/// One conditional claim write.
#[derive(Debug, Clone)]
pub struct SquareClaim {
    pub game_id: i64,
    pub row: i16,
    pub col: i16,
    pub owner_name: String,
    pub owner_initials: String,
}

/// Inserts the unclaimed board for a new game.
pub async fn insert_board<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    coordinates: impl IntoIterator<Item = (i16, i16)>,
) -> Result<(), sea_orm::DbErr> {
    let rows: Vec<squares::ActiveModel> = coordinates
        .into_iter()
        .map(|(row, col)| squares::ActiveModel {
            id: NotSet,
            game_id: Set(game_id),
            row: Set(row),
            col: Set(col),
            claimed: Set(false),
            owner_name: Set(None),
            owner_initials: Set(None),
            claimed_at: Set(None),
        })
        .collect();

    squares::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// Board of a game in row-major order.
pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<squares::Model>, sea_orm::DbErr> {
    squares::Entity::find()
        .filter(squares::Column::GameId.eq(game_id))
        .order_by_asc(squares::Column::Row)
        .order_by_asc(squares::Column::Col)
        .all(conn)
        .await
}

/// Compare-and-swap claim: writes only while the square is unclaimed or
/// already held by the same owner. Returns whether a row matched.
pub async fn claim_if_available<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    claim: SquareClaim,
) -> Result<bool, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let available = Condition::any()
        .add(squares::Column::Claimed.eq(false))
        .add(squares::Column::OwnerName.eq(claim.owner_name.clone()));

    let result = squares::Entity::update_many()
        .col_expr(squares::Column::Claimed, Expr::value(true))
        .col_expr(
            squares::Column::OwnerName,
            Expr::value(Some(claim.owner_name)),
        )
        .col_expr(
            squares::Column::OwnerInitials,
            Expr::value(Some(claim.owner_initials)),
        )
        .col_expr(squares::Column::ClaimedAt, Expr::value(Some(now)))
        .filter(squares::Column::GameId.eq(claim.game_id))
        .filter(squares::Column::Row.eq(claim.row))
        .filter(squares::Column::Col.eq(claim.col))
        .filter(available)
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}

pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = squares::Entity::delete_many()
        .filter(squares::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

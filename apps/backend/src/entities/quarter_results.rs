use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quarter_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(column_type = "SmallInteger")]
    pub quarter: i16,
    #[sea_orm(column_name = "team1_score")]
    pub team1_score: i32,
    #[sea_orm(column_name = "team2_score")]
    pub team2_score: i32,
    #[sea_orm(column_name = "winning_square_id")]
    pub winning_square_id: Option<String>,
    #[sea_orm(column_name = "winner_name")]
    pub winner_name: Option<String>,
    #[sea_orm(column_name = "prize_cents")]
    pub prize_cents: i64,
    #[sea_orm(column_name = "reported_at")]
    pub reported_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

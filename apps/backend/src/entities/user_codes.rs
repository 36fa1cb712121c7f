use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i64,
    /// Stored uppercase.
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(column_name = "squares_allowed")]
    pub squares_allowed: i32,
    #[sea_orm(column_name = "player_name")]
    pub player_name: Option<String>,
    #[sea_orm(column_name = "player_email")]
    pub player_email: Option<String>,
    #[sea_orm(column_name = "is_used")]
    pub is_used: bool,
    #[sea_orm(column_name = "used_at")]
    pub used_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "assigned_user_name")]
    pub assigned_user_name: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
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

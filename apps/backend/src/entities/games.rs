use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "host_id")]
    pub host_id: String,
    #[sea_orm(column_name = "host_name")]
    pub host_name: String,
    pub title: String,
    pub team1: String,
    pub team2: String,
    /// Ten ASCII digits, team 1 digit per row.
    #[sea_orm(column_name = "row_digits")]
    pub row_digits: String,
    /// Ten ASCII digits, team 2 digit per column.
    #[sea_orm(column_name = "col_digits")]
    pub col_digits: String,
    #[sea_orm(column_name = "is_active")]
    pub is_active: bool,
    #[sea_orm(column_name = "is_locked")]
    pub is_locked: bool,
    #[sea_orm(column_name = "is_completed")]
    pub is_completed: bool,
    #[sea_orm(column_name = "current_quarter", column_type = "SmallInteger")]
    pub current_quarter: i16,
    #[sea_orm(column_name = "max_squares_per_user")]
    pub max_squares_per_user: i32,
    #[sea_orm(column_name = "prize_q1")]
    pub prize_q1: i64,
    #[sea_orm(column_name = "prize_q2")]
    pub prize_q2: i64,
    #[sea_orm(column_name = "prize_q3")]
    pub prize_q3: i64,
    #[sea_orm(column_name = "prize_final")]
    pub prize_final: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "version")]
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::squares::Entity")]
    Squares,
    #[sea_orm(has_many = "super::quarter_results::Entity")]
    QuarterResults,
    #[sea_orm(has_many = "super::user_codes::Entity")]
    UserCodes,
}

impl Related<super::squares::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Squares.def()
    }
}

impl Related<super::quarter_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuarterResults.def()
    }
}

impl Related<super::user_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

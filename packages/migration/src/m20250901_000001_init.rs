use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    HostId,
    HostName,
    Title,
    Team1,
    Team2,
    RowDigits,
    ColDigits,
    IsActive,
    IsLocked,
    IsCompleted,
    CurrentQuarter,
    MaxSquaresPerUser,
    PrizeQ1,
    PrizeQ2,
    PrizeQ3,
    PrizeFinal,
    CreatedAt,
    UpdatedAt,
    Version,
}

#[derive(Iden)]
enum Squares {
    Table,
    Id,
    GameId,
    Row,
    Col,
    Claimed,
    OwnerName,
    OwnerInitials,
    ClaimedAt,
}

#[derive(Iden)]
enum QuarterResults {
    Table,
    Id,
    GameId,
    Quarter,
    Team1Score,
    Team2Score,
    WinningSquareId,
    WinnerName,
    PrizeCents,
    ReportedAt,
}

#[derive(Iden)]
enum UserCodes {
    Table,
    Id,
    GameId,
    Code,
    SquaresAllowed,
    PlayerName,
    PlayerEmail,
    IsUsed,
    UsedAt,
    AssignedUserName,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::HostId).string().not_null())
                    .col(ColumnDef::new(Games::HostName).string().not_null())
                    .col(ColumnDef::new(Games::Title).string().not_null())
                    .col(ColumnDef::new(Games::Team1).string().not_null())
                    .col(ColumnDef::new(Games::Team2).string().not_null())
                    .col(ColumnDef::new(Games::RowDigits).string_len(10).not_null())
                    .col(ColumnDef::new(Games::ColDigits).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Games::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Games::IsLocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentQuarter)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::MaxSquaresPerUser)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(ColumnDef::new(Games::PrizeQ1).big_integer().not_null())
                    .col(ColumnDef::new(Games::PrizeQ2).big_integer().not_null())
                    .col(ColumnDef::new(Games::PrizeQ3).big_integer().not_null())
                    .col(ColumnDef::new(Games::PrizeFinal).big_integer().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_host_id")
                    .table(Games::Table)
                    .col(Games::HostId)
                    .to_owned(),
            )
            .await?;

        // squares
        manager
            .create_table(
                Table::create()
                    .table(Squares::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Squares::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Squares::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Squares::Row).small_integer().not_null())
                    .col(ColumnDef::new(Squares::Col).small_integer().not_null())
                    .col(
                        ColumnDef::new(Squares::Claimed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Squares::OwnerName).string().null())
                    .col(ColumnDef::new(Squares::OwnerInitials).string().null())
                    .col(
                        ColumnDef::new(Squares::ClaimedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_squares_game_id")
                            .from(Squares::Table, Squares::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_squares_game_row_col")
                    .table(Squares::Table)
                    .col(Squares::GameId)
                    .col(Squares::Row)
                    .col(Squares::Col)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // quarter_results: one row per (game, quarter), written by upsert
        manager
            .create_table(
                Table::create()
                    .table(QuarterResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuarterResults::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(QuarterResults::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuarterResults::Quarter)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuarterResults::Team1Score)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuarterResults::Team2Score)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuarterResults::WinningSquareId)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(QuarterResults::WinnerName).string().null())
                    .col(
                        ColumnDef::new(QuarterResults::PrizeCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuarterResults::ReportedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quarter_results_game_id")
                            .from(QuarterResults::Table, QuarterResults::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_quarter_results_game_quarter")
                    .table(QuarterResults::Table)
                    .col(QuarterResults::GameId)
                    .col(QuarterResults::Quarter)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // user_codes
        manager
            .create_table(
                Table::create()
                    .table(UserCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserCodes::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(UserCodes::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserCodes::Code)
                            .string_len(16)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserCodes::SquaresAllowed)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(ColumnDef::new(UserCodes::PlayerName).string().null())
                    .col(ColumnDef::new(UserCodes::PlayerEmail).string().null())
                    .col(
                        ColumnDef::new(UserCodes::IsUsed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserCodes::UsedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserCodes::AssignedUserName)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_codes_game_id")
                            .from(UserCodes::Table, UserCodes::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_user_codes_game_id")
                    .table(UserCodes::Table)
                    .col(UserCodes::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_user_codes_game_id")
                    .table(UserCodes::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(UserCodes::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_quarter_results_game_quarter")
                    .table(QuarterResults::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(QuarterResults::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_squares_game_row_col")
                    .table(Squares::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Squares::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_host_id")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}

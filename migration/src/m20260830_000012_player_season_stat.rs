use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000004_competition_season::CompetitionSeason, m20260830_000005_team::Team,
    m20260830_000006_player::Player,
};

static IDX_PLAYER_SEASON_STAT_UNIQUE: &str =
    "idx-player_season_stat-player_id-competition_season_id-team_id";
static FK_PLAYER_SEASON_STAT_PLAYER_ID: &str = "fk-player_season_stat-player_id";
static FK_PLAYER_SEASON_STAT_COMPETITION_SEASON_ID: &str =
    "fk-player_season_stat-competition_season_id";
static FK_PLAYER_SEASON_STAT_TEAM_ID: &str = "fk-player_season_stat-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSeasonStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSeasonStat::Id))
                    .col(integer(PlayerSeasonStat::PlayerId))
                    .col(integer(PlayerSeasonStat::CompetitionSeasonId))
                    .col(integer(PlayerSeasonStat::TeamId))
                    .col(integer(PlayerSeasonStat::Appearances))
                    .col(integer(PlayerSeasonStat::Goals))
                    .col(integer(PlayerSeasonStat::Assists))
                    .col(integer(PlayerSeasonStat::YellowCards))
                    .col(integer(PlayerSeasonStat::RedCards))
                    .col(timestamp(PlayerSeasonStat::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_SEASON_STAT_UNIQUE)
                    .table(PlayerSeasonStat::Table)
                    .col(PlayerSeasonStat::PlayerId)
                    .col(PlayerSeasonStat::CompetitionSeasonId)
                    .col(PlayerSeasonStat::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_SEASON_STAT_PLAYER_ID)
                    .from_tbl(PlayerSeasonStat::Table)
                    .from_col(PlayerSeasonStat::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_SEASON_STAT_COMPETITION_SEASON_ID)
                    .from_tbl(PlayerSeasonStat::Table)
                    .from_col(PlayerSeasonStat::CompetitionSeasonId)
                    .to_tbl(CompetitionSeason::Table)
                    .to_col(CompetitionSeason::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_SEASON_STAT_TEAM_ID)
                    .from_tbl(PlayerSeasonStat::Table)
                    .from_col(PlayerSeasonStat::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_SEASON_STAT_TEAM_ID)
                    .table(PlayerSeasonStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_SEASON_STAT_COMPETITION_SEASON_ID)
                    .table(PlayerSeasonStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_SEASON_STAT_PLAYER_ID)
                    .table(PlayerSeasonStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_SEASON_STAT_UNIQUE)
                    .table(PlayerSeasonStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerSeasonStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerSeasonStat {
    Table,
    Id,
    PlayerId,
    CompetitionSeasonId,
    TeamId,
    Appearances,
    Goals,
    Assists,
    YellowCards,
    RedCards,
    UpdatedAt,
}

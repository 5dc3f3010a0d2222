use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000004_competition_season::CompetitionSeason, m20260830_000005_team::Team,
};

static IDX_FIXTURE_COMPETITION_SEASON_ID: &str = "idx-fixture-competition_season_id";
static FK_FIXTURE_COMPETITION_SEASON_ID: &str = "fk-fixture-competition_season_id";
static FK_FIXTURE_HOME_TEAM_ID: &str = "fk-fixture-home_team_id";
static FK_FIXTURE_AWAY_TEAM_ID: &str = "fk-fixture-away_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fixture::Table)
                    .if_not_exists()
                    .col(pk_auto(Fixture::Id))
                    .col(integer(Fixture::CompetitionSeasonId))
                    .col(integer(Fixture::HomeTeamId))
                    .col(integer(Fixture::AwayTeamId))
                    .col(timestamp(Fixture::Kickoff))
                    .col(string(Fixture::Status))
                    .col(integer_null(Fixture::HomeScore))
                    .col(integer_null(Fixture::AwayScore))
                    .col(timestamp(Fixture::CreatedAt))
                    .col(timestamp(Fixture::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FIXTURE_COMPETITION_SEASON_ID)
                    .table(Fixture::Table)
                    .col(Fixture::CompetitionSeasonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIXTURE_COMPETITION_SEASON_ID)
                    .from_tbl(Fixture::Table)
                    .from_col(Fixture::CompetitionSeasonId)
                    .to_tbl(CompetitionSeason::Table)
                    .to_col(CompetitionSeason::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIXTURE_HOME_TEAM_ID)
                    .from_tbl(Fixture::Table)
                    .from_col(Fixture::HomeTeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIXTURE_AWAY_TEAM_ID)
                    .from_tbl(Fixture::Table)
                    .from_col(Fixture::AwayTeamId)
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
                    .name(FK_FIXTURE_AWAY_TEAM_ID)
                    .table(Fixture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FIXTURE_HOME_TEAM_ID)
                    .table(Fixture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FIXTURE_COMPETITION_SEASON_ID)
                    .table(Fixture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FIXTURE_COMPETITION_SEASON_ID)
                    .table(Fixture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Fixture::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Fixture {
    Table,
    Id,
    CompetitionSeasonId,
    HomeTeamId,
    AwayTeamId,
    Kickoff,
    Status,
    HomeScore,
    AwayScore,
    CreatedAt,
    UpdatedAt,
}

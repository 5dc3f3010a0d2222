use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000004_competition_season::CompetitionSeason, m20260830_000005_team::Team,
};

static IDX_STANDING_UNIQUE: &str = "idx-standing-competition_season_id-team_id";
static FK_STANDING_COMPETITION_SEASON_ID: &str = "fk-standing-competition_season_id";
static FK_STANDING_TEAM_ID: &str = "fk-standing-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Standing::Table)
                    .if_not_exists()
                    .col(pk_auto(Standing::Id))
                    .col(integer(Standing::CompetitionSeasonId))
                    .col(integer(Standing::TeamId))
                    .col(integer(Standing::Position))
                    .col(integer(Standing::Played))
                    .col(integer(Standing::Won))
                    .col(integer(Standing::Drawn))
                    .col(integer(Standing::Lost))
                    .col(integer(Standing::GoalsFor))
                    .col(integer(Standing::GoalsAgainst))
                    .col(integer(Standing::GoalDifference))
                    .col(integer(Standing::Points))
                    .col(timestamp(Standing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // The upsert target for re-aggregation
        manager
            .create_index(
                Index::create()
                    .name(IDX_STANDING_UNIQUE)
                    .table(Standing::Table)
                    .col(Standing::CompetitionSeasonId)
                    .col(Standing::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STANDING_COMPETITION_SEASON_ID)
                    .from_tbl(Standing::Table)
                    .from_col(Standing::CompetitionSeasonId)
                    .to_tbl(CompetitionSeason::Table)
                    .to_col(CompetitionSeason::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STANDING_TEAM_ID)
                    .from_tbl(Standing::Table)
                    .from_col(Standing::TeamId)
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
                    .name(FK_STANDING_TEAM_ID)
                    .table(Standing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STANDING_COMPETITION_SEASON_ID)
                    .table(Standing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STANDING_UNIQUE)
                    .table(Standing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Standing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Standing {
    Table,
    Id,
    CompetitionSeasonId,
    TeamId,
    Position,
    Played,
    Won,
    Drawn,
    Lost,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Points,
    UpdatedAt,
}

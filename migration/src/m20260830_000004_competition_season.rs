use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000002_competition::Competition, m20260830_000003_season::Season,
};

static IDX_COMPETITION_SEASON_UNIQUE: &str = "idx-competition_season-competition_id-season_id";
static FK_COMPETITION_SEASON_COMPETITION_ID: &str = "fk-competition_season-competition_id";
static FK_COMPETITION_SEASON_SEASON_ID: &str = "fk-competition_season-season_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompetitionSeason::Table)
                    .if_not_exists()
                    .col(pk_auto(CompetitionSeason::Id))
                    .col(integer(CompetitionSeason::CompetitionId))
                    .col(integer(CompetitionSeason::SeasonId))
                    .col(timestamp(CompetitionSeason::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPETITION_SEASON_UNIQUE)
                    .table(CompetitionSeason::Table)
                    .col(CompetitionSeason::CompetitionId)
                    .col(CompetitionSeason::SeasonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPETITION_SEASON_COMPETITION_ID)
                    .from_tbl(CompetitionSeason::Table)
                    .from_col(CompetitionSeason::CompetitionId)
                    .to_tbl(Competition::Table)
                    .to_col(Competition::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPETITION_SEASON_SEASON_ID)
                    .from_tbl(CompetitionSeason::Table)
                    .from_col(CompetitionSeason::SeasonId)
                    .to_tbl(Season::Table)
                    .to_col(Season::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPETITION_SEASON_SEASON_ID)
                    .table(CompetitionSeason::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPETITION_SEASON_COMPETITION_ID)
                    .table(CompetitionSeason::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPETITION_SEASON_UNIQUE)
                    .table(CompetitionSeason::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CompetitionSeason::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CompetitionSeason {
    Table,
    Id,
    CompetitionId,
    SeasonId,
    CreatedAt,
}

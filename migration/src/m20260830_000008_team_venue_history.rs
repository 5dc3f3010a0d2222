use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000001_venue::Venue, m20260830_000005_team::Team};

static IDX_TEAM_VENUE_HISTORY_TEAM_ID: &str = "idx-team_venue_history-team_id";
static FK_TEAM_VENUE_HISTORY_TEAM_ID: &str = "fk-team_venue_history-team_id";
static FK_TEAM_VENUE_HISTORY_VENUE_ID: &str = "fk-team_venue_history-venue_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamVenueHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamVenueHistory::Id))
                    .col(integer(TeamVenueHistory::TeamId))
                    .col(integer(TeamVenueHistory::VenueId))
                    .col(date(TeamVenueHistory::ValidFrom))
                    .col(date_null(TeamVenueHistory::ValidTo))
                    .col(timestamp(TeamVenueHistory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_VENUE_HISTORY_TEAM_ID)
                    .table(TeamVenueHistory::Table)
                    .col(TeamVenueHistory::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_VENUE_HISTORY_TEAM_ID)
                    .from_tbl(TeamVenueHistory::Table)
                    .from_col(TeamVenueHistory::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_VENUE_HISTORY_VENUE_ID)
                    .from_tbl(TeamVenueHistory::Table)
                    .from_col(TeamVenueHistory::VenueId)
                    .to_tbl(Venue::Table)
                    .to_col(Venue::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_VENUE_HISTORY_VENUE_ID)
                    .table(TeamVenueHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_VENUE_HISTORY_TEAM_ID)
                    .table(TeamVenueHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_VENUE_HISTORY_TEAM_ID)
                    .table(TeamVenueHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamVenueHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamVenueHistory {
    Table,
    Id,
    TeamId,
    VenueId,
    ValidFrom,
    ValidTo,
    CreatedAt,
}

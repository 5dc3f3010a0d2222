use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000005_team::Team, m20260830_000006_player::Player,
    m20260830_000009_fixture::Fixture,
};

static IDX_FIXTURE_EVENT_FIXTURE_ID: &str = "idx-fixture_event-fixture_id";
static FK_FIXTURE_EVENT_FIXTURE_ID: &str = "fk-fixture_event-fixture_id";
static FK_FIXTURE_EVENT_TEAM_ID: &str = "fk-fixture_event-team_id";
static FK_FIXTURE_EVENT_PLAYER_ID: &str = "fk-fixture_event-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FixtureEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(FixtureEvent::Id))
                    .col(integer(FixtureEvent::FixtureId))
                    .col(integer(FixtureEvent::TeamId))
                    .col(integer(FixtureEvent::PlayerId))
                    .col(integer(FixtureEvent::Minute))
                    .col(string(FixtureEvent::Kind))
                    .col(timestamp(FixtureEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FIXTURE_EVENT_FIXTURE_ID)
                    .table(FixtureEvent::Table)
                    .col(FixtureEvent::FixtureId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIXTURE_EVENT_FIXTURE_ID)
                    .from_tbl(FixtureEvent::Table)
                    .from_col(FixtureEvent::FixtureId)
                    .to_tbl(Fixture::Table)
                    .to_col(Fixture::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIXTURE_EVENT_TEAM_ID)
                    .from_tbl(FixtureEvent::Table)
                    .from_col(FixtureEvent::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIXTURE_EVENT_PLAYER_ID)
                    .from_tbl(FixtureEvent::Table)
                    .from_col(FixtureEvent::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FIXTURE_EVENT_PLAYER_ID)
                    .table(FixtureEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FIXTURE_EVENT_TEAM_ID)
                    .table(FixtureEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FIXTURE_EVENT_FIXTURE_ID)
                    .table(FixtureEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FIXTURE_EVENT_FIXTURE_ID)
                    .table(FixtureEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FixtureEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FixtureEvent {
    Table,
    Id,
    FixtureId,
    TeamId,
    PlayerId,
    Minute,
    Kind,
    CreatedAt,
}

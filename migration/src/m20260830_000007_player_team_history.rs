use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000005_team::Team, m20260830_000006_player::Player};

static IDX_PLAYER_TEAM_HISTORY_PLAYER_ID: &str = "idx-player_team_history-player_id";
static IDX_PLAYER_TEAM_HISTORY_TEAM_ID: &str = "idx-player_team_history-team_id";
static FK_PLAYER_TEAM_HISTORY_PLAYER_ID: &str = "fk-player_team_history-player_id";
static FK_PLAYER_TEAM_HISTORY_TEAM_ID: &str = "fk-player_team_history-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerTeamHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerTeamHistory::Id))
                    .col(integer(PlayerTeamHistory::PlayerId))
                    .col(integer(PlayerTeamHistory::TeamId))
                    .col(string(PlayerTeamHistory::Kind))
                    .col(date(PlayerTeamHistory::ValidFrom))
                    .col(date_null(PlayerTeamHistory::ValidTo))
                    .col(timestamp(PlayerTeamHistory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_HISTORY_PLAYER_ID)
                    .table(PlayerTeamHistory::Table)
                    .col(PlayerTeamHistory::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_HISTORY_TEAM_ID)
                    .table(PlayerTeamHistory::Table)
                    .col(PlayerTeamHistory::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_HISTORY_PLAYER_ID)
                    .from_tbl(PlayerTeamHistory::Table)
                    .from_col(PlayerTeamHistory::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_HISTORY_TEAM_ID)
                    .from_tbl(PlayerTeamHistory::Table)
                    .from_col(PlayerTeamHistory::TeamId)
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
                    .name(FK_PLAYER_TEAM_HISTORY_TEAM_ID)
                    .table(PlayerTeamHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_TEAM_HISTORY_PLAYER_ID)
                    .table(PlayerTeamHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TEAM_HISTORY_TEAM_ID)
                    .table(PlayerTeamHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TEAM_HISTORY_PLAYER_ID)
                    .table(PlayerTeamHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerTeamHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerTeamHistory {
    Table,
    Id,
    PlayerId,
    TeamId,
    Kind,
    ValidFrom,
    ValidTo,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_SLUG: &str = "idx-player-slug";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_uniq(Player::Slug))
                    .col(string(Player::Name))
                    .col(string(Player::Position))
                    .col(string(Player::Country))
                    .col(date_null(Player::DateOfBirth))
                    .col(timestamp(Player::CreatedAt))
                    .col(timestamp(Player::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_SLUG)
                    .table(Player::Table)
                    .col(Player::Slug)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_PLAYER_SLUG).table(Player::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Slug,
    Name,
    Position,
    Country,
    DateOfBirth,
    CreatedAt,
    UpdatedAt,
}

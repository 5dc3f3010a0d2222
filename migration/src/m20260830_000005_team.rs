use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_SLUG: &str = "idx-team-slug";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_uniq(Team::Slug))
                    .col(string(Team::Name))
                    .col(string(Team::ShortName))
                    .col(string(Team::Country))
                    .col(integer_null(Team::Founded))
                    .col(string_null(Team::LogoUrl))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_SLUG)
                    .table(Team::Table)
                    .col(Team::Slug)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_TEAM_SLUG).table(Team::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Slug,
    Name,
    ShortName,
    Country,
    Founded,
    LogoUrl,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_VENUE_SLUG: &str = "idx-venue-slug";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(pk_auto(Venue::Id))
                    .col(string_uniq(Venue::Slug))
                    .col(string(Venue::Name))
                    .col(string(Venue::City))
                    .col(string(Venue::Country))
                    .col(integer_null(Venue::Capacity))
                    .col(timestamp(Venue::CreatedAt))
                    .col(timestamp(Venue::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VENUE_SLUG)
                    .table(Venue::Table)
                    .col(Venue::Slug)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_VENUE_SLUG).table(Venue::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    Slug,
    Name,
    City,
    Country,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

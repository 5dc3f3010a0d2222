use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMPETITION_SLUG: &str = "idx-competition-slug";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(pk_auto(Competition::Id))
                    .col(string_uniq(Competition::Slug))
                    .col(string(Competition::Name))
                    .col(string(Competition::Country))
                    .col(string_null(Competition::LogoUrl))
                    .col(timestamp(Competition::CreatedAt))
                    .col(timestamp(Competition::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPETITION_SLUG)
                    .table(Competition::Table)
                    .col(Competition::Slug)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPETITION_SLUG)
                    .table(Competition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Competition {
    Table,
    Id,
    Slug,
    Name,
    Country,
    LogoUrl,
    CreatedAt,
    UpdatedAt,
}

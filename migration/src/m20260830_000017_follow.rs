use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000013_account::Account;

static IDX_FOLLOW_UNIQUE: &str = "idx-follow-account_id-entity_type-entity_id";
static FK_FOLLOW_ACCOUNT_ID: &str = "fk-follow-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follow::Table)
                    .if_not_exists()
                    .col(pk_auto(Follow::Id))
                    .col(integer(Follow::AccountId))
                    .col(string(Follow::EntityType))
                    .col(integer(Follow::EntityId))
                    .col(timestamp(Follow::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Makes a duplicate follow a conflict no-op instead of a second row
        manager
            .create_index(
                Index::create()
                    .name(IDX_FOLLOW_UNIQUE)
                    .table(Follow::Table)
                    .col(Follow::AccountId)
                    .col(Follow::EntityType)
                    .col(Follow::EntityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOLLOW_ACCOUNT_ID)
                    .from_tbl(Follow::Table)
                    .from_col(Follow::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FOLLOW_ACCOUNT_ID)
                    .table(Follow::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_FOLLOW_UNIQUE).table(Follow::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Follow::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Follow {
    Table,
    Id,
    AccountId,
    EntityType,
    EntityId,
    CreatedAt,
}

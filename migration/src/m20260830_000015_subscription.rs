use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000013_account::Account;

static IDX_SUBSCRIPTION_ACCOUNT_ID: &str = "idx-subscription-account_id";
static FK_SUBSCRIPTION_ACCOUNT_ID: &str = "fk-subscription-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscription::Id))
                    .col(integer_uniq(Subscription::AccountId))
                    .col(string(Subscription::Tier))
                    .col(string(Subscription::Status))
                    .col(timestamp_null(Subscription::EndDate))
                    .col(timestamp(Subscription::CreatedAt))
                    .col(timestamp(Subscription::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBSCRIPTION_ACCOUNT_ID)
                    .table(Subscription::Table)
                    .col(Subscription::AccountId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_ACCOUNT_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::AccountId)
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
                    .name(FK_SUBSCRIPTION_ACCOUNT_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBSCRIPTION_ACCOUNT_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    Id,
    AccountId,
    Tier,
    Status,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

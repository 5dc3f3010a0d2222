use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000013_account::Account;

static IDX_USAGE_LIMIT_UNIQUE: &str = "idx-usage_limit-account_id-feature-day";
static FK_USAGE_LIMIT_ACCOUNT_ID: &str = "fk-usage_limit-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsageLimit::Table)
                    .if_not_exists()
                    .col(pk_auto(UsageLimit::Id))
                    .col(integer(UsageLimit::AccountId))
                    .col(string(UsageLimit::Feature))
                    .col(date(UsageLimit::Day))
                    .col(integer(UsageLimit::Count))
                    .to_owned(),
            )
            .await?;

        // The conflict target of the atomic insert-or-increment
        manager
            .create_index(
                Index::create()
                    .name(IDX_USAGE_LIMIT_UNIQUE)
                    .table(UsageLimit::Table)
                    .col(UsageLimit::AccountId)
                    .col(UsageLimit::Feature)
                    .col(UsageLimit::Day)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USAGE_LIMIT_ACCOUNT_ID)
                    .from_tbl(UsageLimit::Table)
                    .from_col(UsageLimit::AccountId)
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
                    .name(FK_USAGE_LIMIT_ACCOUNT_ID)
                    .table(UsageLimit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USAGE_LIMIT_UNIQUE)
                    .table(UsageLimit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UsageLimit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UsageLimit {
    Table,
    Id,
    AccountId,
    Feature,
    Day,
    Count,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000013_account::Account;

static IDX_SESSION_TOKEN: &str = "idx-session-token";
static IDX_SESSION_ACCOUNT_ID: &str = "idx-session-account_id";
static FK_SESSION_ACCOUNT_ID: &str = "fk-session-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(pk_auto(Session::Id))
                    .col(integer(Session::AccountId))
                    .col(string_uniq(Session::Token))
                    .col(string_null(Session::Device))
                    .col(timestamp(Session::CreatedAt))
                    .col(timestamp(Session::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SESSION_TOKEN)
                    .table(Session::Table)
                    .col(Session::Token)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SESSION_ACCOUNT_ID)
                    .table(Session::Table)
                    .col(Session::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SESSION_ACCOUNT_ID)
                    .from_tbl(Session::Table)
                    .from_col(Session::AccountId)
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
                    .name(FK_SESSION_ACCOUNT_ID)
                    .table(Session::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SESSION_ACCOUNT_ID)
                    .table(Session::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_SESSION_TOKEN).table(Session::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    Id,
    AccountId,
    Token,
    Device,
    CreatedAt,
    ExpiresAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000009_fixture::Fixture, m20260830_000013_account::Account};

static IDX_PREDICTION_UNIQUE: &str = "idx-prediction-account_id-fixture_id";
static FK_PREDICTION_ACCOUNT_ID: &str = "fk-prediction-account_id";
static FK_PREDICTION_FIXTURE_ID: &str = "fk-prediction-fixture_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prediction::Table)
                    .if_not_exists()
                    .col(pk_auto(Prediction::Id))
                    .col(integer(Prediction::AccountId))
                    .col(integer(Prediction::FixtureId))
                    .col(integer(Prediction::HomeScore))
                    .col(integer(Prediction::AwayScore))
                    .col(timestamp(Prediction::CreatedAt))
                    .col(timestamp(Prediction::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PREDICTION_UNIQUE)
                    .table(Prediction::Table)
                    .col(Prediction::AccountId)
                    .col(Prediction::FixtureId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PREDICTION_ACCOUNT_ID)
                    .from_tbl(Prediction::Table)
                    .from_col(Prediction::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PREDICTION_FIXTURE_ID)
                    .from_tbl(Prediction::Table)
                    .from_col(Prediction::FixtureId)
                    .to_tbl(Fixture::Table)
                    .to_col(Fixture::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PREDICTION_FIXTURE_ID)
                    .table(Prediction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PREDICTION_ACCOUNT_ID)
                    .table(Prediction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PREDICTION_UNIQUE)
                    .table(Prediction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Prediction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Prediction {
    Table,
    Id,
    AccountId,
    FixtureId,
    HomeScore,
    AwayScore,
    CreatedAt,
    UpdatedAt,
}

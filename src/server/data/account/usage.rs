use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
};

use entity::enums::Feature;

pub struct UsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Atomic insert-or-increment of the day's counter. The conflict
    /// target is the (account_id, feature, day) unique index, so two
    /// concurrent calls both land and count twice.
    pub async fn increment(
        &self,
        account_id: i32,
        feature: Feature,
        day: NaiveDate,
    ) -> Result<entity::usage_limit::Model, DbErr> {
        let row = entity::usage_limit::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            feature: ActiveValue::Set(feature),
            day: ActiveValue::Set(day),
            count: ActiveValue::Set(1),
            ..Default::default()
        };

        entity::prelude::UsageLimit::insert(row)
            .on_conflict(
                OnConflict::columns([
                    entity::usage_limit::Column::AccountId,
                    entity::usage_limit::Column::Feature,
                    entity::usage_limit::Column::Day,
                ])
                .value(
                    entity::usage_limit::Column::Count,
                    Expr::col(entity::usage_limit::Column::Count).add(1),
                )
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// The day's count, zero when no row exists yet.
    pub async fn count_for_day(
        &self,
        account_id: i32,
        feature: Feature,
        day: NaiveDate,
    ) -> Result<i32, DbErr> {
        let row = entity::prelude::UsageLimit::find()
            .filter(entity::usage_limit::Column::AccountId.eq(account_id))
            .filter(entity::usage_limit::Column::Feature.eq(feature))
            .filter(entity::usage_limit::Column::Day.eq(day))
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.count).unwrap_or(0))
    }
}

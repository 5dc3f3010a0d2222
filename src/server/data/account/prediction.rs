use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct PredictionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PredictionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upsert on (account_id, fixture_id): resubmitting replaces the old
    /// guess.
    pub async fn upsert(
        &self,
        account_id: i32,
        fixture_id: i32,
        home_score: i32,
        away_score: i32,
    ) -> Result<entity::prediction::Model, DbErr> {
        let prediction = entity::prediction::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            fixture_id: ActiveValue::Set(fixture_id),
            home_score: ActiveValue::Set(home_score),
            away_score: ActiveValue::Set(away_score),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Prediction::insert(prediction)
            .on_conflict(
                OnConflict::columns([
                    entity::prediction::Column::AccountId,
                    entity::prediction::Column::FixtureId,
                ])
                .update_columns([
                    entity::prediction::Column::HomeScore,
                    entity::prediction::Column::AwayScore,
                    entity::prediction::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn list_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::prediction::Model>, DbErr> {
        entity::prelude::Prediction::find()
            .filter(entity::prediction::Column::AccountId.eq(account_id))
            .order_by_desc(entity::prediction::Column::UpdatedAt)
            .order_by_desc(entity::prediction::Column::Id)
            .all(self.db)
            .await
    }
}

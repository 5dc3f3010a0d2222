use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use entity::enums::{SubscriptionStatus, Tier};

pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_account(
        &self,
        account_id: i32,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::AccountId.eq(account_id))
            .one(self.db)
            .await
    }

    /// The lazily created default row: active free tier, no end date.
    pub async fn create_free(
        &self,
        account_id: i32,
    ) -> Result<entity::subscription::Model, DbErr> {
        let subscription = entity::subscription::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            tier: ActiveValue::Set(Tier::Free),
            status: ActiveValue::Set(SubscriptionStatus::Active),
            end_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        subscription.insert(self.db).await
    }

    pub async fn update(
        &self,
        subscription_id: i32,
        tier: Tier,
        status: SubscriptionStatus,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        let subscription = match entity::prelude::Subscription::find_by_id(subscription_id)
            .one(self.db)
            .await?
        {
            Some(subscription) => subscription,
            None => return Ok(None),
        };

        let mut subscription_am = subscription.into_active_model();
        subscription_am.tier = ActiveValue::Set(tier);
        subscription_am.status = ActiveValue::Set(status);
        subscription_am.end_date = ActiveValue::Set(end_date);
        subscription_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let subscription = subscription_am.update(self.db).await?;

        Ok(Some(subscription))
    }
}

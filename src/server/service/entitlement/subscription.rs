use chrono::{Days, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use entity::enums::{SubscriptionStatus, Tier};

use crate::{
    model::account::SubscriptionDto,
    server::{data::account::subscription::SubscriptionRepository, error::Error},
};

/// Length of a paid period; stands in for the billing cycle, which no
/// payment provider reports here.
const BILLING_PERIOD_DAYS: u64 = 30;

/// Subscription lifecycle. Every account has exactly one subscription row,
/// created lazily as free on first access, so "no subscription" can never
/// be observed.
pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_or_create(
        &self,
        account_id: i32,
    ) -> Result<entity::subscription::Model, Error> {
        let subscription_repo = SubscriptionRepository::new(self.db);

        if let Some(subscription) = subscription_repo.get_by_account(account_id).await? {
            return Ok(subscription);
        }

        let subscription = subscription_repo.create_free(account_id).await?;

        Ok(subscription)
    }

    /// The tier whose limits apply right now: a cancelled subscription
    /// keeps its benefits until `end_date`, then falls back to free.
    pub fn effective_tier(
        subscription: &entity::subscription::Model,
        now: NaiveDateTime,
    ) -> Tier {
        match subscription.status {
            SubscriptionStatus::Active => subscription.tier,
            SubscriptionStatus::Cancelled => match subscription.end_date {
                Some(end_date) if end_date > now => subscription.tier,
                _ => Tier::Free,
            },
            SubscriptionStatus::PastDue => Tier::Free,
        }
    }

    pub async fn view(&self, account_id: i32) -> Result<SubscriptionDto, Error> {
        let subscription = self.get_or_create(account_id).await?;
        let effective = Self::effective_tier(&subscription, Utc::now().naive_utc());

        Ok(SubscriptionDto {
            tier: tier_label(subscription.tier).to_string(),
            status: status_label(subscription.status).to_string(),
            end_date: subscription.end_date,
            effective_tier: tier_label(effective).to_string(),
        })
    }

    /// Changes tier as a full replacement. Upgrades (including pro to
    /// ultimate) reset the paid period to now + 30 days; downgrading to
    /// free takes effect immediately and clears the end date.
    pub async fn change_tier(
        &self,
        account_id: i32,
        tier: Tier,
    ) -> Result<SubscriptionDto, Error> {
        let subscription = self.get_or_create(account_id).await?;

        let end_date = if tier == Tier::Free {
            None
        } else {
            Some(
                Utc::now()
                    .naive_utc()
                    .checked_add_days(Days::new(BILLING_PERIOD_DAYS))
                    .ok_or_else(|| Error::Validation("End date out of range".to_string()))?,
            )
        };

        let updated = SubscriptionRepository::new(self.db)
            .update(subscription.id, tier, SubscriptionStatus::Active, end_date)
            .await?
            .ok_or_else(|| Error::Validation("Subscription vanished mid-update".to_string()))?;

        Ok(SubscriptionDto {
            tier: tier_label(updated.tier).to_string(),
            status: status_label(updated.status).to_string(),
            end_date: updated.end_date,
            effective_tier: tier_label(Self::effective_tier(&updated, Utc::now().naive_utc()))
                .to_string(),
        })
    }

    /// Turns auto-renew off. Benefits stay in force until the end of the
    /// already-paid period. Cancelling a free subscription is a no-op.
    pub async fn cancel(&self, account_id: i32) -> Result<SubscriptionDto, Error> {
        let subscription = self.get_or_create(account_id).await?;

        if subscription.tier == Tier::Free {
            return self.view(account_id).await;
        }

        let end_date = match subscription.end_date {
            Some(end_date) => end_date,
            None => Utc::now()
                .naive_utc()
                .checked_add_days(Days::new(BILLING_PERIOD_DAYS))
                .ok_or_else(|| Error::Validation("End date out of range".to_string()))?,
        };

        let updated = SubscriptionRepository::new(self.db)
            .update(
                subscription.id,
                subscription.tier,
                SubscriptionStatus::Cancelled,
                Some(end_date),
            )
            .await?
            .ok_or_else(|| Error::Validation("Subscription vanished mid-update".to_string()))?;

        Ok(SubscriptionDto {
            tier: tier_label(updated.tier).to_string(),
            status: status_label(updated.status).to_string(),
            end_date: updated.end_date,
            effective_tier: tier_label(Self::effective_tier(&updated, Utc::now().naive_utc()))
                .to_string(),
        })
    }
}

fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Free => "free",
        Tier::Pro => "pro",
        Tier::Ultimate => "ultimate",
    }
}

fn status_label(status: SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => "active",
        SubscriptionStatus::Cancelled => "cancelled",
        SubscriptionStatus::PastDue => "past_due",
    }
}

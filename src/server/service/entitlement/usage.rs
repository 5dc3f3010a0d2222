use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::enums::Feature;

use crate::{
    model::account::UsageDto,
    server::{
        data::account::{follow::FollowRepository, usage::UsageRepository},
        error::{entitlement::EntitlementError, Error},
        model::tier::{limit_for, Limit},
        service::entitlement::subscription::SubscriptionService,
        util::time::usage_day,
    },
};

/// Entitlement checks against the tier matrix.
///
/// Numeric features consume a daily counter (checked then incremented);
/// boolean features are plain gates; the follows cap is checked against
/// the live follow count rather than a counter.
pub struct UsageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn current_limit(&self, account_id: i32, feature: Feature) -> Result<Limit, Error> {
        let subscription = SubscriptionService::new(self.db)
            .get_or_create(account_id)
            .await?;
        let tier = SubscriptionService::effective_tier(&subscription, Utc::now().naive_utc());

        Ok(limit_for(tier, feature))
    }

    /// Gate for boolean features: ad-free, advanced stats, data export.
    pub async fn require_feature(&self, account_id: i32, feature: Feature) -> Result<(), Error> {
        let limit = self.current_limit(account_id, feature).await?;

        if !limit.accessible() {
            return Err(EntitlementError::FeatureLocked { feature }.into());
        }

        Ok(())
    }

    /// Checks today's quota and, when within it, spends one unit. The
    /// increment is the atomic insert-or-increment upsert, so concurrent
    /// spends never lose counts.
    pub async fn spend(&self, account_id: i32, feature: Feature) -> Result<UsageDto, Error> {
        let limit = self.current_limit(account_id, feature).await?;

        // Unbounded tiers never touch the counter table.
        let Some(cap) = limit.cap() else {
            return Ok(UsageDto {
                allowed: true,
                used: 0,
                limit: None,
            });
        };

        let day = usage_day(Utc::now());
        let usage_repo = UsageRepository::new(self.db);

        let used = i64::from(usage_repo.count_for_day(account_id, feature, day).await?);

        if used >= cap {
            return Err(EntitlementError::QuotaExceeded {
                feature,
                used,
                limit: cap,
            }
            .into());
        }

        let row = usage_repo.increment(account_id, feature, day).await?;

        Ok(UsageDto {
            allowed: true,
            used: i64::from(row.count),
            limit: Some(cap),
        })
    }

    /// Today's usage without spending.
    pub async fn usage(&self, account_id: i32, feature: Feature) -> Result<UsageDto, Error> {
        let limit = self.current_limit(account_id, feature).await?;

        let Some(cap) = limit.cap() else {
            return Ok(UsageDto {
                allowed: true,
                used: 0,
                limit: None,
            });
        };

        let day = usage_day(Utc::now());

        let used = i64::from(
            UsageRepository::new(self.db)
                .count_for_day(account_id, feature, day)
                .await?,
        );

        Ok(UsageDto {
            allowed: used < cap,
            used,
            limit: Some(cap),
        })
    }

    /// The follows cap checks the live follow count, so unfollowing frees
    /// a slot.
    pub async fn require_follow_slot(&self, account_id: i32) -> Result<(), Error> {
        let limit = self.current_limit(account_id, Feature::Follows).await?;

        if let Some(cap) = limit.cap() {
            let used = FollowRepository::new(self.db)
                .count_for_account(account_id)
                .await? as i64;

            if used >= cap {
                return Err(EntitlementError::QuotaExceeded {
                    feature: Feature::Follows,
                    used,
                    limit: cap,
                }
                .into());
            }
        }

        Ok(())
    }
}

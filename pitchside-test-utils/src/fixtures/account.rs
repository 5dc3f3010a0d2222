//! Account-side fixture factories.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::enums::{EntityType, Feature, SubscriptionStatus, Tier};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// A valid argon2id PHC string for the password "hunter2". Tests that never
/// log in can use it without paying for a real hash.
pub const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$VHzkFEuUcr6mFUGfGUktdYKLPOn+m+1Rx6+ZsTHCrT8";

pub async fn insert_account(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::account::Model, DbErr> {
    entity::account::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        display_name: ActiveValue::Set(email.split('@').next().unwrap_or(email).to_string()),
        password_hash: ActiveValue::Set(DUMMY_PASSWORD_HASH.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_session(
    db: &DatabaseConnection,
    account_id: i32,
    token: &str,
    expires_at: NaiveDateTime,
) -> Result<entity::session::Model, DbErr> {
    entity::session::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        token: ActiveValue::Set(token.to_string()),
        device: ActiveValue::Set(Some("test-device".to_string())),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        expires_at: ActiveValue::Set(expires_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_subscription(
    db: &DatabaseConnection,
    account_id: i32,
    tier: Tier,
    status: SubscriptionStatus,
    end_date: Option<NaiveDateTime>,
) -> Result<entity::subscription::Model, DbErr> {
    entity::subscription::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        tier: ActiveValue::Set(tier),
        status: ActiveValue::Set(status),
        end_date: ActiveValue::Set(end_date),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_usage(
    db: &DatabaseConnection,
    account_id: i32,
    feature: Feature,
    day: NaiveDate,
    count: i32,
) -> Result<entity::usage_limit::Model, DbErr> {
    entity::usage_limit::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        feature: ActiveValue::Set(feature),
        day: ActiveValue::Set(day),
        count: ActiveValue::Set(count),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_follow(
    db: &DatabaseConnection,
    account_id: i32,
    entity_type: EntityType,
    entity_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        entity_type: ActiveValue::Set(entity_type),
        entity_id: ActiveValue::Set(entity_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_notification(
    db: &DatabaseConnection,
    account_id: i32,
    kind: &str,
    message: &str,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        kind: ActiveValue::Set(kind.to_string()),
        message: ActiveValue::Set(message.to_string()),
        read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

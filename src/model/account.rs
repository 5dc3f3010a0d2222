use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::EntityTypeDto;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
    pub device: Option<String>,
}

/// Issued on login, registration, and password change. The token is shown
/// exactly once.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub expires_at: NaiveDateTime,
}

/// Registration response: the new account plus its first session token.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponseDto {
    pub account: AccountDto,
    pub token: TokenDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub email: String,
    pub display_name: String,
}

impl From<entity::account::Model> for AccountDto {
    fn from(account: entity::account::Model) -> Self {
        Self {
            id: account.id,
            email: account.email,
            display_name: account.display_name,
        }
    }
}

/// A session row as listed to its owner; the bearer token itself is never
/// echoed back.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub id: i32,
    pub device: Option<String>,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
    pub current: bool,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub device: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TierDto {
    Free,
    Pro,
    Ultimate,
}

impl From<TierDto> for entity::enums::Tier {
    fn from(value: TierDto) -> Self {
        match value {
            TierDto::Free => Self::Free,
            TierDto::Pro => Self::Pro,
            TierDto::Ultimate => Self::Ultimate,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub tier: String,
    pub status: String,
    pub end_date: Option<NaiveDateTime>,
    /// Tier actually in force, accounting for cancellation and expiry.
    pub effective_tier: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeTierDto {
    pub tier: TierDto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeatureDto {
    Follows,
    Comparisons,
    ApiCalls,
    AdFree,
    AdvancedStats,
    DataExport,
}

impl From<FeatureDto> for entity::enums::Feature {
    fn from(value: FeatureDto) -> Self {
        match value {
            FeatureDto::Follows => Self::Follows,
            FeatureDto::Comparisons => Self::Comparisons,
            FeatureDto::ApiCalls => Self::ApiCalls,
            FeatureDto::AdFree => Self::AdFree,
            FeatureDto::AdvancedStats => Self::AdvancedStats,
            FeatureDto::DataExport => Self::DataExport,
        }
    }
}

/// Outcome of a daily usage check. `limit` is absent for unlimited tiers.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UsageDto {
    pub allowed: bool,
    pub used: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowRequestDto {
    pub entity_type: EntityTypeDto,
    pub entity_id: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowStateDto {
    pub following: bool,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowDto {
    pub entity_type: EntityTypeDto,
    pub entity_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionRequestDto {
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionDto {
    pub fixture_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountDto {
    pub unread: u64,
}

/// Everything an account has stored with us, for the data-export feature.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportDto {
    pub account: AccountDto,
    pub follows: Vec<FollowDto>,
    pub predictions: Vec<PredictionDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

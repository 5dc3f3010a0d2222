//! Database-backed enums shared across tables.
//!
//! All enums are stored as short lowercase strings so the schema stays
//! readable in psql and portable between Postgres and the sqlite test
//! databases.

use sea_orm::entity::prelude::*;

/// Subscription tier. Limits for each tier live in the server's
/// entitlement matrix, not in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Tier {
    #[sea_orm(string_value = "free")]
    Free,
    #[sea_orm(string_value = "pro")]
    Pro,
    #[sea_orm(string_value = "ultimate")]
    Ultimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SubscriptionStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "past_due")]
    PastDue,
}

/// Feature gated by the entitlement engine, also the key of daily usage
/// counters for the numeric features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Feature {
    #[sea_orm(string_value = "follows")]
    Follows,
    #[sea_orm(string_value = "comparisons")]
    Comparisons,
    #[sea_orm(string_value = "api_calls")]
    ApiCalls,
    #[sea_orm(string_value = "ad_free")]
    AdFree,
    #[sea_orm(string_value = "advanced_stats")]
    AdvancedStats,
    #[sea_orm(string_value = "data_export")]
    DataExport,
}

/// Kind of entity a follow row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EntityType {
    #[sea_orm(string_value = "player")]
    Player,
    #[sea_orm(string_value = "team")]
    Team,
    #[sea_orm(string_value = "competition")]
    Competition,
}

/// Membership kind of a player-team affiliation. A player may hold at most
/// one open affiliation per kind, so a loan can run concurrently with the
/// parent contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AffiliationKind {
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "loan")]
    Loan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FixtureStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "finished")]
    Finished,
    #[sea_orm(string_value = "postponed")]
    Postponed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EventKind {
    #[sea_orm(string_value = "goal")]
    Goal,
    #[sea_orm(string_value = "assist")]
    Assist,
    #[sea_orm(string_value = "yellow_card")]
    YellowCard,
    #[sea_orm(string_value = "red_card")]
    RedCard,
}

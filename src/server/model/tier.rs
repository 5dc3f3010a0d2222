//! The tier/feature entitlement matrix.
//!
//! Limits are data, not branching code: one static table maps
//! (tier, feature) to a [`Limit`], and every entitlement check goes through
//! the same lookup. Adding a tier or feature is a row change here, not new
//! conditionals in the services.

use entity::enums::{Feature, Tier};

/// Entitlement value for one (tier, feature) cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Numeric feature with no cap; checks short-circuit without touching
    /// usage storage.
    Unlimited,
    /// Numeric feature capped per day (or in total, for follows).
    At(i64),
    /// Boolean feature toggle.
    Enabled(bool),
}

impl Limit {
    /// Whether the feature is usable at all on this tier. Numeric features
    /// count as accessible when unlimited or with a cap above zero.
    pub fn accessible(&self) -> bool {
        match self {
            Limit::Unlimited => true,
            Limit::At(n) => *n > 0,
            Limit::Enabled(enabled) => *enabled,
        }
    }

    /// The numeric cap, `None` when unbounded. Boolean features report
    /// `Some(0)` when disabled so quota checks fail closed.
    pub fn cap(&self) -> Option<i64> {
        match self {
            Limit::Unlimited => None,
            Limit::At(n) => Some(*n),
            Limit::Enabled(true) => None,
            Limit::Enabled(false) => Some(0),
        }
    }
}

static TIER_MATRIX: &[(Tier, Feature, Limit)] = &[
    (Tier::Free, Feature::Follows, Limit::At(10)),
    (Tier::Free, Feature::Comparisons, Limit::At(5)),
    (Tier::Free, Feature::ApiCalls, Limit::At(25)),
    (Tier::Free, Feature::AdFree, Limit::Enabled(false)),
    (Tier::Free, Feature::AdvancedStats, Limit::Enabled(false)),
    (Tier::Free, Feature::DataExport, Limit::Enabled(false)),
    (Tier::Pro, Feature::Follows, Limit::At(50)),
    (Tier::Pro, Feature::Comparisons, Limit::At(50)),
    (Tier::Pro, Feature::ApiCalls, Limit::At(500)),
    (Tier::Pro, Feature::AdFree, Limit::Enabled(true)),
    (Tier::Pro, Feature::AdvancedStats, Limit::Enabled(true)),
    (Tier::Pro, Feature::DataExport, Limit::Enabled(false)),
    (Tier::Ultimate, Feature::Follows, Limit::Unlimited),
    (Tier::Ultimate, Feature::Comparisons, Limit::Unlimited),
    (Tier::Ultimate, Feature::ApiCalls, Limit::Unlimited),
    (Tier::Ultimate, Feature::AdFree, Limit::Enabled(true)),
    (Tier::Ultimate, Feature::AdvancedStats, Limit::Enabled(true)),
    (Tier::Ultimate, Feature::DataExport, Limit::Enabled(true)),
];

/// Look up the limit for a (tier, feature) pair.
pub fn limit_for(tier: Tier, feature: Feature) -> Limit {
    TIER_MATRIX
        .iter()
        .find(|(t, f, _)| *t == tier && *f == feature)
        .map(|(_, _, limit)| *limit)
        // Unknown cells fail closed rather than open.
        .unwrap_or(Limit::Enabled(false))
}

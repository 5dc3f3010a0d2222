//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and enforce the domain rules: temporal
//! resolution of the affiliation ledger, standings and stat aggregation,
//! session auth, and the tier entitlement checks.

pub mod account;
pub mod catalog;
pub mod entitlement;
pub mod stats;

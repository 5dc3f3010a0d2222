//! Data access layer repositories.
//!
//! Repositories are thin wrappers over the entity crate, organized by
//! domain: catalog (reference data and the affiliation ledgers), stats
//! (fixtures and aggregates), and account (auth, subscriptions, and the
//! personalization tables). Business rules live in the service layer.

pub mod account;
pub mod catalog;
pub mod stats;

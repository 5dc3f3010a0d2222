//! Server-side models and type definitions.
//!
//! Application state, the validity-interval type backing the affiliation
//! ledger, temporal query contexts, and the tier/feature entitlement
//! matrix.

pub mod app;
pub mod interval;
pub mod temporal;
pub mod tier;

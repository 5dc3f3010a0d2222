//! Test utilities for the Pitchside workspace.
//!
//! Provides an in-memory sqlite context, schema creation from the entity
//! models, and fixture factories for catalog and account data. Intended
//! only as a dev-dependency of the server crate.

pub mod error;
pub mod fixtures;
pub mod prelude;
pub mod setup;

//! Server application core modules.
//!
//! HTTP routing, authentication, entitlement checks, the temporal catalog,
//! standings aggregation, and the data access layer over SeaORM.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

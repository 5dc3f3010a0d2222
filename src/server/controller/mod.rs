//! HTTP controller endpoints for the Pitchside web API.
//!
//! This module contains Axum handlers for the catalog (entities, seasons,
//! affiliations), stats (standings, fixtures, player stats), authentication,
//! and account functionality. Controllers handle HTTP requests, validate
//! inputs, interact with services, and return appropriate HTTP responses.
//! They resolve authentication through the bearer-token extractor and use
//! utoipa for OpenAPI documentation.

pub mod account;
pub mod auth;
pub mod catalog;
pub mod stats;
pub mod util;

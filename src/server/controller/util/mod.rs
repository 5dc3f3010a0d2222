//! Utility extractors for controller request handling.
//!
//! This module provides the bearer-token extractor that resolves the
//! authenticated account for protected endpoints, and pagination query
//! validation shared across listing endpoints.

pub mod current_account;
pub mod pagination;

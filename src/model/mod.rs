//! Shared request/response DTOs for the HTTP API.

pub mod account;
pub mod api;
pub mod catalog;

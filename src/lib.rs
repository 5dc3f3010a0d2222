//! Pitchside: a sports data platform backend.
//!
//! Reference data (players, teams, competitions, venues), a bitemporal
//! affiliation ledger, derived standings and season stats, and account
//! features (sessions, subscriptions, follows, predictions) behind an
//! axum HTTP API.

pub mod model;
pub mod server;

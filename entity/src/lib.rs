//! SeaORM entity models for the Pitchside database schema.

pub mod prelude;

pub mod account;
pub mod competition;
pub mod competition_season;
pub mod enums;
pub mod fixture;
pub mod fixture_event;
pub mod follow;
pub mod notification;
pub mod player;
pub mod player_season_stat;
pub mod player_team_history;
pub mod prediction;
pub mod season;
pub mod session;
pub mod standing;
pub mod subscription;
pub mod team;
pub mod team_venue_history;
pub mod usage_limit;
pub mod venue;

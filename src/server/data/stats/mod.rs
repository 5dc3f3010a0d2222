pub mod fixture;
pub mod fixture_event;
pub mod player_season_stat;
pub mod standing;

pub mod player_stats;
pub mod standings;

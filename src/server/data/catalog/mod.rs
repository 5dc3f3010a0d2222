pub mod affiliation;
pub mod competition;
pub mod competition_season;
pub mod player;
pub mod season;
pub mod team;
pub mod team_venue;
pub mod venue;

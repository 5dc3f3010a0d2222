pub use super::account::Entity as Account;
pub use super::competition::Entity as Competition;
pub use super::competition_season::Entity as CompetitionSeason;
pub use super::fixture::Entity as Fixture;
pub use super::fixture_event::Entity as FixtureEvent;
pub use super::follow::Entity as Follow;
pub use super::notification::Entity as Notification;
pub use super::player::Entity as Player;
pub use super::player_season_stat::Entity as PlayerSeasonStat;
pub use super::player_team_history::Entity as PlayerTeamHistory;
pub use super::prediction::Entity as Prediction;
pub use super::season::Entity as Season;
pub use super::session::Entity as Session;
pub use super::standing::Entity as Standing;
pub use super::subscription::Entity as Subscription;
pub use super::team::Entity as Team;
pub use super::team_venue_history::Entity as TeamVenueHistory;
pub use super::usage_limit::Entity as UsageLimit;
pub use super::venue::Entity as Venue;

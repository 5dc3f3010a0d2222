pub use sea_orm_migration::prelude::*;

mod m20260830_000001_venue;
mod m20260830_000002_competition;
mod m20260830_000003_season;
mod m20260830_000004_competition_season;
mod m20260830_000005_team;
mod m20260830_000006_player;
mod m20260830_000007_player_team_history;
mod m20260830_000008_team_venue_history;
mod m20260830_000009_fixture;
mod m20260830_000010_fixture_event;
mod m20260830_000011_standing;
mod m20260830_000012_player_season_stat;
mod m20260830_000013_account;
mod m20260830_000014_session;
mod m20260830_000015_subscription;
mod m20260830_000016_usage_limit;
mod m20260830_000017_follow;
mod m20260830_000018_prediction;
mod m20260830_000019_notification;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_venue::Migration),
            Box::new(m20260830_000002_competition::Migration),
            Box::new(m20260830_000003_season::Migration),
            Box::new(m20260830_000004_competition_season::Migration),
            Box::new(m20260830_000005_team::Migration),
            Box::new(m20260830_000006_player::Migration),
            Box::new(m20260830_000007_player_team_history::Migration),
            Box::new(m20260830_000008_team_venue_history::Migration),
            Box::new(m20260830_000009_fixture::Migration),
            Box::new(m20260830_000010_fixture_event::Migration),
            Box::new(m20260830_000011_standing::Migration),
            Box::new(m20260830_000012_player_season_stat::Migration),
            Box::new(m20260830_000013_account::Migration),
            Box::new(m20260830_000014_session::Migration),
            Box::new(m20260830_000015_subscription::Migration),
            Box::new(m20260830_000016_usage_limit::Migration),
            Box::new(m20260830_000017_follow::Migration),
            Box::new(m20260830_000018_prediction::Migration),
            Box::new(m20260830_000019_notification::Migration),
        ]
    }
}

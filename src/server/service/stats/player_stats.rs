use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use entity::enums::{EventKind, FixtureStatus};

use crate::{
    model::catalog::{CareerTotalsDto, FixtureEventDto, PlayerSeasonStatDto, RecordEventDto},
    server::{
        data::{
            catalog::{
                competition_season::CompetitionSeasonRepository, player::PlayerRepository,
            },
            stats::{
                fixture::FixtureRepository,
                fixture_event::FixtureEventRepository,
                player_season_stat::{PlayerSeasonStatRepository, PlayerSeasonStatUpsert},
            },
        },
        error::{catalog::CatalogError, Error},
    },
};

/// Aggregates fixture events into per-season stat lines.
///
/// Appearances are derived from recorded events: a player appeared in a
/// fixture when at least one event names them. Lines are keyed by
/// (player, team) within the edition, so a mid-season transfer splits the
/// season into one line per club.
pub struct PlayerStatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerStatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recomputes every stat line of one edition from its finished
    /// fixtures' events.
    pub async fn recompute(
        &self,
        competition_season_id: i32,
    ) -> Result<Vec<entity::player_season_stat::Model>, Error> {
        let finished = FixtureRepository::new(self.db)
            .list_for_competition_season(competition_season_id, Some(FixtureStatus::Finished))
            .await?;

        let fixture_ids = finished.iter().map(|f| f.id).collect::<Vec<_>>();
        let events = FixtureEventRepository::new(self.db)
            .list_for_fixtures(fixture_ids)
            .await?;

        #[derive(Default)]
        struct Line {
            fixtures: HashSet<i32>,
            goals: i32,
            assists: i32,
            yellow_cards: i32,
            red_cards: i32,
        }

        let mut lines: HashMap<(i32, i32), Line> = HashMap::new();

        for event in events {
            let line = lines.entry((event.player_id, event.team_id)).or_default();
            line.fixtures.insert(event.fixture_id);

            match event.kind {
                EventKind::Goal => line.goals += 1,
                EventKind::Assist => line.assists += 1,
                EventKind::YellowCard => line.yellow_cards += 1,
                EventKind::RedCard => line.red_cards += 1,
            }
        }

        let rows = lines
            .into_iter()
            .map(|((player_id, team_id), line)| PlayerSeasonStatUpsert {
                player_id,
                team_id,
                appearances: line.fixtures.len() as i32,
                goals: line.goals,
                assists: line.assists,
                yellow_cards: line.yellow_cards,
                red_cards: line.red_cards,
            })
            .collect::<Vec<_>>();

        let stored = PlayerSeasonStatRepository::new(self.db)
            .upsert_many(competition_season_id, rows)
            .await?;

        Ok(stored)
    }

    /// Records a match event. Events landing after the final whistle
    /// still count: the edition's stat lines are recomputed when the
    /// fixture has already finished.
    pub async fn record_event(
        &self,
        fixture_id: i32,
        event: RecordEventDto,
    ) -> Result<FixtureEventDto, Error> {
        if !(0..=120).contains(&event.minute) {
            return Err(Error::Validation(
                "Minute must fall between 0 and 120".to_string(),
            ));
        }

        let fixture = FixtureRepository::new(self.db)
            .get(fixture_id)
            .await?
            .ok_or(CatalogError::FixtureNotFound(fixture_id))?;

        let created = FixtureEventRepository::new(self.db)
            .create(
                fixture_id,
                event.team_id,
                event.player_id,
                event.minute,
                event.kind.into(),
            )
            .await?;

        if fixture.status == FixtureStatus::Finished {
            self.recompute(fixture.competition_season_id).await?;
        }

        Ok(created.into())
    }

    /// Every stat line a player has, plus career totals across them.
    pub async fn player_stats(
        &self,
        player_slug: &str,
        season_id: Option<i32>,
    ) -> Result<(Vec<PlayerSeasonStatDto>, CareerTotalsDto), Error> {
        let player = PlayerRepository::new(self.db)
            .get_by_slug(player_slug)
            .await?
            .ok_or_else(|| CatalogError::EntityNotFound {
                entity_type: "player".to_string(),
                slug: player_slug.to_string(),
            })?;

        let lines = PlayerSeasonStatRepository::new(self.db)
            .list_for_player(player.id)
            .await?;

        // Career totals always span everything; the season filter narrows
        // only the per-season lines.
        let totals = career_totals(&lines);

        let lines = match season_id {
            None => lines,
            Some(season_id) => {
                let editions: HashSet<i32> = CompetitionSeasonRepository::new(self.db)
                    .list_for_season(season_id)
                    .await?
                    .into_iter()
                    .map(|edition| edition.id)
                    .collect();

                lines
                    .into_iter()
                    .filter(|line| editions.contains(&line.competition_season_id))
                    .collect()
            }
        };

        let dtos = lines
            .into_iter()
            .map(|line| PlayerSeasonStatDto {
                competition_season_id: line.competition_season_id,
                team_id: line.team_id,
                appearances: line.appearances,
                goals: line.goals,
                assists: line.assists,
                yellow_cards: line.yellow_cards,
                red_cards: line.red_cards,
            })
            .collect();

        Ok((dtos, totals))
    }

    /// Top scorers of one edition.
    pub async fn top_scorers(
        &self,
        competition_season_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::player_season_stat::Model>, Error> {
        let lines = PlayerSeasonStatRepository::new(self.db)
            .top_scorers(competition_season_id, limit)
            .await?;

        Ok(lines)
    }
}

/// Sums stat lines into career totals.
pub fn career_totals(lines: &[entity::player_season_stat::Model]) -> CareerTotalsDto {
    let mut totals = CareerTotalsDto {
        appearances: 0,
        goals: 0,
        assists: 0,
        yellow_cards: 0,
        red_cards: 0,
    };

    for line in lines {
        totals.appearances += i64::from(line.appearances);
        totals.goals += i64::from(line.goals);
        totals.assists += i64::from(line.assists);
        totals.yellow_cards += i64::from(line.yellow_cards);
        totals.red_cards += i64::from(line.red_cards);
    }

    totals
}

#[cfg(test)]
mod tests {
    mod recompute {
        use entity::enums::EventKind;
        use pitchside_test_utils::prelude::*;

        use crate::server::service::stats::player_stats::PlayerStatsService;

        /// Events split into one line per (player, team) with appearances
        /// counted per distinct fixture
        #[tokio::test]
        async fn splits_lines_per_team() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let competition = insert_competition(&test.db, "premier").await?;
            let season = insert_season(
                &test.db,
                "2024/25",
                date(2024, 8, 1),
                date(2025, 6, 30),
                true,
            )
            .await?;
            let edition = insert_competition_season(&test.db, competition.id, season.id).await?;
            let albion = insert_team(&test.db, "albion").await?;
            let mersey = insert_team(&test.db, "mersey").await?;
            let player = insert_player(&test.db, "jo-striker").await?;

            // Two goals in one fixture for albion, one assist for mersey
            // after a mid-season transfer.
            let first = insert_finished_fixture(
                &test.db,
                edition.id,
                albion.id,
                mersey.id,
                datetime(2024, 8, 17, 15, 0),
                2,
                0,
            )
            .await?;
            let second = insert_finished_fixture(
                &test.db,
                edition.id,
                mersey.id,
                albion.id,
                datetime(2025, 2, 1, 15, 0),
                1,
                0,
            )
            .await?;
            insert_fixture_event(&test.db, first.id, albion.id, player.id, 12, EventKind::Goal)
                .await?;
            insert_fixture_event(&test.db, first.id, albion.id, player.id, 79, EventKind::Goal)
                .await?;
            insert_fixture_event(
                &test.db,
                second.id,
                mersey.id,
                player.id,
                55,
                EventKind::Assist,
            )
            .await?;

            let stats_service = PlayerStatsService::new(&test.db);
            stats_service.recompute(edition.id).await?;

            let (lines, totals) = stats_service.player_stats("jo-striker", None).await?;

            assert_eq!(lines.len(), 2);
            let albion_line = lines
                .iter()
                .find(|l| l.team_id == albion.id)
                .ok_or_else(|| TestError::Setup("missing albion line".into()))?;
            assert_eq!(albion_line.appearances, 1);
            assert_eq!(albion_line.goals, 2);
            assert_eq!(totals.appearances, 2);
            assert_eq!(totals.goals, 2);
            assert_eq!(totals.assists, 1);

            Ok(())
        }
    }

    mod career_totals {
        use chrono::Utc;

        use crate::server::service::stats::player_stats::career_totals;

        fn line(appearances: i32, goals: i32) -> entity::player_season_stat::Model {
            entity::player_season_stat::Model {
                id: 0,
                player_id: 1,
                competition_season_id: 1,
                team_id: 1,
                appearances,
                goals,
                assists: 0,
                yellow_cards: 0,
                red_cards: 0,
                updated_at: Utc::now().naive_utc(),
            }
        }

        #[test]
        fn sums_across_lines() {
            let totals = career_totals(&[line(30, 12), line(28, 9), line(5, 1)]);

            assert_eq!(totals.appearances, 63);
            assert_eq!(totals.goals, 22);
        }

        #[test]
        fn empty_career_is_zero() {
            let totals = career_totals(&[]);

            assert_eq!(totals.appearances, 0);
            assert_eq!(totals.goals, 0);
        }
    }
}

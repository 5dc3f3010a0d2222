use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use entity::enums::{EntityType, FixtureStatus};

use crate::{
    model::catalog::{FixtureDto, StandingDto},
    server::{
        data::{
            account::{follow::FollowRepository, notification::NotificationRepository},
            catalog::{competition::CompetitionRepository, team::TeamRepository},
            stats::{
                fixture::FixtureRepository,
                standing::{StandingRepository, StandingUpsert},
            },
        },
        error::{catalog::CatalogError, Error},
        model::temporal::TemporalContext,
        service::{catalog::season::SeasonService, stats::player_stats::PlayerStatsService},
    },
};

/// Points for a win; draws score one, losses nothing.
const WIN_POINTS: i32 = 3;

/// Derives league tables from finished fixtures and keeps the stored rows
/// in sync. The stored table is a cache; the fixture list is the source of
/// truth and a recompute is always safe.
pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The table for one competition in a temporal context, with team
    /// names resolved.
    pub async fn table(
        &self,
        competition_slug: &str,
        ctx: TemporalContext,
    ) -> Result<Vec<StandingDto>, Error> {
        let competition = CompetitionRepository::new(self.db)
            .get_by_slug(competition_slug)
            .await?
            .ok_or_else(|| CatalogError::EntityNotFound {
                entity_type: "competition".to_string(),
                slug: competition_slug.to_string(),
            })?;

        let (edition, _) = SeasonService::new(self.db)
            .resolve_edition(competition.id, ctx)
            .await?;

        let rows = StandingRepository::new(self.db)
            .list_for_competition_season(edition.id)
            .await?;

        let team_ids = rows.iter().map(|r| r.team_id).collect::<Vec<_>>();
        let teams = TeamRepository::new(self.db).get_many(team_ids).await?;
        let teams: HashMap<i32, _> = teams.into_iter().map(|t| (t.id, t)).collect();

        Ok(rows
            .into_iter()
            .map(|row| StandingDto {
                position: row.position,
                team_id: row.team_id,
                team_name: teams
                    .get(&row.team_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_default(),
                played: row.played,
                won: row.won,
                drawn: row.drawn,
                lost: row.lost,
                goals_for: row.goals_for,
                goals_against: row.goals_against,
                goal_difference: row.goal_difference,
                points: row.points,
            })
            .collect())
    }

    /// Recomputes and stores the table for one edition from its finished
    /// fixtures.
    pub async fn recompute(
        &self,
        competition_season_id: i32,
    ) -> Result<Vec<entity::standing::Model>, Error> {
        let finished = FixtureRepository::new(self.db)
            .list_for_competition_season(competition_season_id, Some(FixtureStatus::Finished))
            .await?;

        let rows = table_from_results(&finished);

        let stored = StandingRepository::new(self.db)
            .upsert_many(competition_season_id, rows)
            .await?;

        Ok(stored)
    }

    /// Records a final score, recomputes the edition's table and player
    /// stats, and notifies followers of both teams.
    pub async fn record_result(
        &self,
        fixture_id: i32,
        home_score: i32,
        away_score: i32,
    ) -> Result<FixtureDto, Error> {
        if home_score < 0 || away_score < 0 {
            return Err(Error::Validation("Scores cannot be negative".to_string()));
        }

        let fixture = FixtureRepository::new(self.db)
            .record_result(fixture_id, home_score, away_score)
            .await?
            .ok_or(CatalogError::FixtureNotFound(fixture_id))?;

        self.recompute(fixture.competition_season_id).await?;
        PlayerStatsService::new(self.db)
            .recompute(fixture.competition_season_id)
            .await?;

        self.notify_followers(&fixture).await?;

        Ok(fixture.into())
    }

    async fn notify_followers(&self, fixture: &entity::fixture::Model) -> Result<(), Error> {
        let teams = TeamRepository::new(self.db)
            .get_many(vec![fixture.home_team_id, fixture.away_team_id])
            .await?;
        let teams: HashMap<i32, _> = teams.into_iter().map(|t| (t.id, t)).collect();

        let message = format!(
            "Full time: {} {} - {} {}",
            teams
                .get(&fixture.home_team_id)
                .map(|t| t.name.as_str())
                .unwrap_or("Home"),
            fixture.home_score.unwrap_or(0),
            fixture.away_score.unwrap_or(0),
            teams
                .get(&fixture.away_team_id)
                .map(|t| t.name.as_str())
                .unwrap_or("Away"),
        );

        let follow_repo = FollowRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        // One notification per follower, even for followers of both teams.
        let mut notified = std::collections::HashSet::new();
        for team_id in [fixture.home_team_id, fixture.away_team_id] {
            for follow in follow_repo.followers_of(EntityType::Team, team_id).await? {
                if notified.insert(follow.account_id) {
                    notification_repo
                        .create(follow.account_id, "result", &message)
                        .await?;
                }
            }
        }

        Ok(())
    }
}

/// Pure fold from finished fixtures to a sorted, position-assigned table.
///
/// Ordering: points, then goal difference, then goals scored, then team id
/// as the stable last resort.
pub fn table_from_results(fixtures: &[entity::fixture::Model]) -> Vec<StandingUpsert> {
    #[derive(Default)]
    struct Tally {
        played: i32,
        won: i32,
        drawn: i32,
        lost: i32,
        goals_for: i32,
        goals_against: i32,
    }

    let mut tallies: HashMap<i32, Tally> = HashMap::new();

    for fixture in fixtures {
        let (home_score, away_score) = match (fixture.home_score, fixture.away_score) {
            (Some(h), Some(a)) => (h, a),
            // A finished fixture without a score contributes nothing.
            _ => continue,
        };

        {
            let home = tallies.entry(fixture.home_team_id).or_default();
            home.played += 1;
            home.goals_for += home_score;
            home.goals_against += away_score;
            match home_score.cmp(&away_score) {
                std::cmp::Ordering::Greater => home.won += 1,
                std::cmp::Ordering::Equal => home.drawn += 1,
                std::cmp::Ordering::Less => home.lost += 1,
            }
        }

        {
            let away = tallies.entry(fixture.away_team_id).or_default();
            away.played += 1;
            away.goals_for += away_score;
            away.goals_against += home_score;
            match away_score.cmp(&home_score) {
                std::cmp::Ordering::Greater => away.won += 1,
                std::cmp::Ordering::Equal => away.drawn += 1,
                std::cmp::Ordering::Less => away.lost += 1,
            }
        }
    }

    let mut rows = tallies
        .into_iter()
        .map(|(team_id, tally)| StandingUpsert {
            team_id,
            position: 0,
            played: tally.played,
            won: tally.won,
            drawn: tally.drawn,
            lost: tally.lost,
            goals_for: tally.goals_for,
            goals_against: tally.goals_against,
            goal_difference: tally.goals_for - tally.goals_against,
            points: tally.won * WIN_POINTS + tally.drawn,
        })
        .collect::<Vec<_>>();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team_id.cmp(&b.team_id))
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index as i32 + 1;
    }

    rows
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use entity::enums::FixtureStatus;

    use super::table_from_results;

    fn finished(home_team_id: i32, away_team_id: i32, home: i32, away: i32) -> entity::fixture::Model {
        entity::fixture::Model {
            id: 0,
            competition_season_id: 1,
            home_team_id,
            away_team_id,
            kickoff: Utc::now().naive_utc(),
            status: FixtureStatus::Finished,
            home_score: Some(home),
            away_score: Some(away),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    /// Win = 3, draw = 1, loss = 0
    #[test]
    fn scores_points_three_one_zero() {
        let rows = table_from_results(&[finished(1, 2, 2, 0), finished(2, 3, 1, 1)]);

        let points: Vec<(i32, i32)> = rows.iter().map(|r| (r.team_id, r.points)).collect();

        assert!(points.contains(&(1, 3)));
        assert!(points.contains(&(2, 1)));
        assert!(points.contains(&(3, 1)));
    }

    /// Ties break on goal difference, then goals for, then team id
    #[test]
    fn breaks_ties_in_order() {
        // Teams 1 and 2 both win once; team 1 by a wider margin.
        let rows = table_from_results(&[finished(1, 3, 4, 0), finished(2, 3, 1, 0)]);

        assert_eq!(rows[0].team_id, 1);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].team_id, 2);
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[2].team_id, 3);

        // Identical records fall back to team id.
        let rows = table_from_results(&[finished(5, 6, 0, 0)]);
        assert_eq!(rows[0].team_id, 5);
        assert_eq!(rows[1].team_id, 6);
    }

    /// A finished fixture missing a score is skipped, not counted as 0-0
    #[test]
    fn skips_scoreless_finished_fixture() {
        let mut fixture = finished(1, 2, 0, 0);
        fixture.home_score = None;

        let rows = table_from_results(&[fixture]);

        assert!(rows.is_empty());
    }

    mod record_result {
        use entity::enums::EntityType;
        use pitchside_test_utils::prelude::*;

        use crate::server::{
            data::account::notification::NotificationRepository,
            data::stats::standing::StandingRepository,
            service::stats::standings::StandingsService,
        };

        /// Recording a result updates the stored table and notifies
        /// followers of both teams once
        #[tokio::test]
        async fn updates_table_and_notifies() -> Result<(), TestError> {
            let test = test_context_with_all_tables().await?;
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
            let home = insert_team(&test.db, "albion").await?;
            let away = insert_team(&test.db, "mersey").await?;
            let fixture = insert_scheduled_fixture(
                &test.db,
                edition.id,
                home.id,
                away.id,
                datetime(2024, 8, 17, 15, 0),
            )
            .await?;
            let fan = insert_account(&test.db, "fan@example.com").await?;
            insert_follow(&test.db, fan.id, EntityType::Team, home.id).await?;
            insert_follow(&test.db, fan.id, EntityType::Team, away.id).await?;

            let standings_service = StandingsService::new(&test.db);
            let result = standings_service.record_result(fixture.id, 2, 1).await?;

            assert_eq!(result.status, "finished");

            let table = StandingRepository::new(&test.db)
                .list_for_competition_season(edition.id)
                .await?;
            assert_eq!(table.len(), 2);
            assert_eq!(table[0].team_id, home.id);
            assert_eq!(table[0].points, 3);

            // Follows both teams but gets a single notification.
            let notifications = NotificationRepository::new(&test.db)
                .list_for_account(fan.id, 10, 0)
                .await?;
            assert_eq!(notifications.len(), 1);
            assert!(notifications[0].message.contains("2 - 1"));

            Ok(())
        }
    }
}

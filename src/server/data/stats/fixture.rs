use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use entity::enums::FixtureStatus;

pub struct FixtureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, fixture_id: i32) -> Result<Option<entity::fixture::Model>, DbErr> {
        entity::prelude::Fixture::find_by_id(fixture_id)
            .one(self.db)
            .await
    }

    /// Fixtures of one competition edition in kickoff order, optionally
    /// narrowed by status.
    pub async fn list_for_competition_season(
        &self,
        competition_season_id: i32,
        status: Option<FixtureStatus>,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        let mut query = entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::CompetitionSeasonId.eq(competition_season_id));

        if let Some(status) = status {
            query = query.filter(entity::fixture::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::fixture::Column::Kickoff)
            .all(self.db)
            .await
    }

    /// Upcoming scheduled fixtures for a set of teams, soonest first.
    pub async fn upcoming_for_teams(
        &self,
        team_ids: Vec<i32>,
        after: chrono::NaiveDateTime,
        limit: u64,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::Status.eq(FixtureStatus::Scheduled))
            .filter(entity::fixture::Column::Kickoff.gt(after))
            .filter(
                Condition::any()
                    .add(entity::fixture::Column::HomeTeamId.is_in(team_ids.clone()))
                    .add(entity::fixture::Column::AwayTeamId.is_in(team_ids)),
            )
            .order_by_asc(entity::fixture::Column::Kickoff)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Records a final score and flips the fixture to finished.
    pub async fn record_result(
        &self,
        fixture_id: i32,
        home_score: i32,
        away_score: i32,
    ) -> Result<Option<entity::fixture::Model>, DbErr> {
        let fixture = match entity::prelude::Fixture::find_by_id(fixture_id)
            .one(self.db)
            .await?
        {
            Some(fixture) => fixture,
            None => return Ok(None),
        };

        let mut fixture_am = fixture.into_active_model();
        fixture_am.status = ActiveValue::Set(FixtureStatus::Finished);
        fixture_am.home_score = ActiveValue::Set(Some(home_score));
        fixture_am.away_score = ActiveValue::Set(Some(away_score));
        fixture_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let fixture = fixture_am.update(self.db).await?;

        Ok(Some(fixture))
    }
}

#[cfg(test)]
mod tests {
    use pitchside_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    async fn edition_and_teams(db: &DatabaseConnection) -> Result<(i32, i32, i32), TestError> {
        let competition = insert_competition(db, "premier").await?;
        let season = insert_season(db, "2024/25", date(2024, 8, 1), date(2025, 6, 30), true).await?;
        let edition = insert_competition_season(db, competition.id, season.id).await?;
        let home = insert_team(db, "albion").await?;
        let away = insert_team(db, "mersey").await?;

        Ok((edition.id, home.id, away.id))
    }

    mod list_for_competition_season {
        use entity::enums::FixtureStatus;

        use super::*;
        use crate::server::data::stats::fixture::FixtureRepository;

        /// Expect the status filter to drop scheduled fixtures
        #[tokio::test]
        async fn filters_by_status() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let (edition_id, home_id, away_id) = edition_and_teams(&test.db).await?;
            insert_finished_fixture(
                &test.db,
                edition_id,
                home_id,
                away_id,
                datetime(2024, 8, 17, 15, 0),
                2,
                1,
            )
            .await?;
            insert_scheduled_fixture(
                &test.db,
                edition_id,
                away_id,
                home_id,
                datetime(2025, 1, 11, 15, 0),
            )
            .await?;

            let fixture_repo = FixtureRepository::new(&test.db);
            let finished = fixture_repo
                .list_for_competition_season(edition_id, Some(FixtureStatus::Finished))
                .await?;
            let all = fixture_repo
                .list_for_competition_season(edition_id, None)
                .await?;

            assert_eq!(finished.len(), 1);
            assert_eq!(all.len(), 2);

            Ok(())
        }
    }

    mod record_result {
        use entity::enums::FixtureStatus;

        use super::*;
        use crate::server::data::stats::fixture::FixtureRepository;

        /// Expect the fixture to finish with the given score
        #[tokio::test]
        async fn finishes_fixture_with_score() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let (edition_id, home_id, away_id) = edition_and_teams(&test.db).await?;
            let fixture = insert_scheduled_fixture(
                &test.db,
                edition_id,
                home_id,
                away_id,
                datetime(2024, 8, 17, 15, 0),
            )
            .await?;

            let fixture_repo = FixtureRepository::new(&test.db);
            let updated = fixture_repo.record_result(fixture.id, 3, 1).await?;

            let updated = updated.ok_or_else(|| TestError::Setup("fixture missing".into()))?;
            assert_eq!(updated.status, FixtureStatus::Finished);
            assert_eq!(updated.home_score, Some(3));
            assert_eq!(updated.away_score, Some(1));

            Ok(())
        }

        /// Expect Ok(None) for a fixture that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_fixture() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;

            let fixture_repo = FixtureRepository::new(&test.db);
            let updated = fixture_repo.record_result(404, 3, 1).await?;

            assert!(updated.is_none());

            Ok(())
        }
    }
}

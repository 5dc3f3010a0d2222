use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

/// One computed table row, keyed by team within the competition season
/// supplied to the upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingUpsert {
    pub team_id: i32,
    pub position: i32,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

pub struct StandingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the whole table for one edition, conflicting on
    /// (competition_season_id, team_id).
    pub async fn upsert_many(
        &self,
        competition_season_id: i32,
        rows: Vec<StandingUpsert>,
    ) -> Result<Vec<entity::standing::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let standings = rows
            .into_iter()
            .map(|row| entity::standing::ActiveModel {
                competition_season_id: ActiveValue::Set(competition_season_id),
                team_id: ActiveValue::Set(row.team_id),
                position: ActiveValue::Set(row.position),
                played: ActiveValue::Set(row.played),
                won: ActiveValue::Set(row.won),
                drawn: ActiveValue::Set(row.drawn),
                lost: ActiveValue::Set(row.lost),
                goals_for: ActiveValue::Set(row.goals_for),
                goals_against: ActiveValue::Set(row.goals_against),
                goal_difference: ActiveValue::Set(row.goal_difference),
                points: ActiveValue::Set(row.points),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            });

        entity::prelude::Standing::insert_many(standings)
            .on_conflict(
                OnConflict::columns([
                    entity::standing::Column::CompetitionSeasonId,
                    entity::standing::Column::TeamId,
                ])
                .update_columns([
                    entity::standing::Column::Position,
                    entity::standing::Column::Played,
                    entity::standing::Column::Won,
                    entity::standing::Column::Drawn,
                    entity::standing::Column::Lost,
                    entity::standing::Column::GoalsFor,
                    entity::standing::Column::GoalsAgainst,
                    entity::standing::Column::GoalDifference,
                    entity::standing::Column::Points,
                    entity::standing::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// The stored table in position order.
    pub async fn list_for_competition_season(
        &self,
        competition_season_id: i32,
    ) -> Result<Vec<entity::standing::Model>, DbErr> {
        entity::prelude::Standing::find()
            .filter(entity::standing::Column::CompetitionSeasonId.eq(competition_season_id))
            .order_by_asc(entity::standing::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn get_for_team(
        &self,
        competition_season_id: i32,
        team_id: i32,
    ) -> Result<Option<entity::standing::Model>, DbErr> {
        entity::prelude::Standing::find()
            .filter(entity::standing::Column::CompetitionSeasonId.eq(competition_season_id))
            .filter(entity::standing::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }

    pub async fn delete_for_competition_season(
        &self,
        competition_season_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Standing::delete_many()
            .filter(entity::standing::Column::CompetitionSeasonId.eq(competition_season_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use pitchside_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::server::data::stats::standing::StandingUpsert;

    fn row(team_id: i32, position: i32, points: i32) -> StandingUpsert {
        StandingUpsert {
            team_id,
            position,
            played: 1,
            won: 1,
            drawn: 0,
            lost: 0,
            goals_for: 2,
            goals_against: 0,
            goal_difference: 2,
            points,
        }
    }

    async fn edition_and_teams(db: &DatabaseConnection) -> Result<(i32, i32, i32), TestError> {
        let competition = insert_competition(db, "premier").await?;
        let season = insert_season(db, "2024/25", date(2024, 8, 1), date(2025, 6, 30), true).await?;
        let edition = insert_competition_season(db, competition.id, season.id).await?;
        let albion = insert_team(db, "albion").await?;
        let mersey = insert_team(db, "mersey").await?;

        Ok((edition.id, albion.id, mersey.id))
    }

    mod upsert_many {
        use super::*;
        use crate::server::data::stats::standing::StandingRepository;

        /// A second upsert for the same teams replaces rather than
        /// duplicates the rows
        #[tokio::test]
        async fn replaces_rows_on_conflict() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let (edition_id, albion_id, mersey_id) = edition_and_teams(&test.db).await?;

            let standing_repo = StandingRepository::new(&test.db);
            standing_repo
                .upsert_many(edition_id, vec![row(albion_id, 1, 3), row(mersey_id, 2, 0)])
                .await?;
            standing_repo
                .upsert_many(edition_id, vec![row(mersey_id, 1, 6), row(albion_id, 2, 3)])
                .await?;

            let table = standing_repo.list_for_competition_season(edition_id).await?;

            assert_eq!(table.len(), 2);
            assert_eq!(table[0].team_id, mersey_id);
            assert_eq!(table[0].points, 6);
            assert_eq!(table[1].team_id, albion_id);

            Ok(())
        }

        /// Expect an empty upsert to be a no-op rather than an error
        #[tokio::test]
        async fn accepts_empty_batch() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let (edition_id, _, _) = edition_and_teams(&test.db).await?;

            let standing_repo = StandingRepository::new(&test.db);
            let rows = standing_repo.upsert_many(edition_id, vec![]).await?;

            assert!(rows.is_empty());

            Ok(())
        }
    }
}

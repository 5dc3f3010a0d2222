use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct CompetitionSeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionSeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        competition_season_id: i32,
    ) -> Result<Option<entity::competition_season::Model>, DbErr> {
        entity::prelude::CompetitionSeason::find_by_id(competition_season_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_pair(
        &self,
        competition_id: i32,
        season_id: i32,
    ) -> Result<Option<entity::competition_season::Model>, DbErr> {
        entity::prelude::CompetitionSeason::find()
            .filter(entity::competition_season::Column::CompetitionId.eq(competition_id))
            .filter(entity::competition_season::Column::SeasonId.eq(season_id))
            .one(self.db)
            .await
    }

    /// Every edition running in one season, across competitions.
    pub async fn list_for_season(
        &self,
        season_id: i32,
    ) -> Result<Vec<entity::competition_season::Model>, DbErr> {
        entity::prelude::CompetitionSeason::find()
            .filter(entity::competition_season::Column::SeasonId.eq(season_id))
            .all(self.db)
            .await
    }

    /// Editions of a competition joined with their season rows.
    pub async fn list_for_competition(
        &self,
        competition_id: i32,
    ) -> Result<
        Vec<(
            entity::competition_season::Model,
            Option<entity::season::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::CompetitionSeason::find()
            .filter(entity::competition_season::Column::CompetitionId.eq(competition_id))
            .find_also_related(entity::season::Entity)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_by_pair {
        use pitchside_test_utils::prelude::*;

        use crate::server::data::catalog::competition_season::CompetitionSeasonRepository;

        /// Expect Ok(Some(_)) for a linked competition and season
        #[tokio::test]
        async fn finds_existing_edition() -> Result<(), TestError> {
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
            let edition =
                insert_competition_season(&test.db, competition.id, season.id).await?;

            let cs_repo = CompetitionSeasonRepository::new(&test.db);
            let found = cs_repo.get_by_pair(competition.id, season.id).await?;

            assert_eq!(found.map(|cs| cs.id), Some(edition.id));

            Ok(())
        }

        /// Expect Ok(None) when the competition never ran in that season
        #[tokio::test]
        async fn returns_none_for_unlinked_pair() -> Result<(), TestError> {
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

            let cs_repo = CompetitionSeasonRepository::new(&test.db);
            let found = cs_repo.get_by_pair(competition.id, season.id).await?;

            assert!(found.is_none());

            Ok(())
        }
    }
}

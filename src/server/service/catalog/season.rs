use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::SeasonDto,
    server::{
        data::catalog::{
            competition::CompetitionRepository, competition_season::CompetitionSeasonRepository,
            season::SeasonRepository,
        },
        error::{catalog::CatalogError, Error},
        model::temporal::TemporalContext,
    },
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<SeasonDto>, Error> {
        let seasons = SeasonRepository::new(self.db).list().await?;

        Ok(seasons.into_iter().map(season_dto).collect())
    }

    /// Seasons in which a competition ran an edition, newest first.
    pub async fn competition_seasons(
        &self,
        competition_slug: &str,
    ) -> Result<Vec<SeasonDto>, Error> {
        let competition = CompetitionRepository::new(self.db)
            .get_by_slug(competition_slug)
            .await?
            .ok_or_else(|| CatalogError::EntityNotFound {
                entity_type: "competition".to_string(),
                slug: competition_slug.to_string(),
            })?;

        let editions = CompetitionSeasonRepository::new(self.db)
            .list_for_competition(competition.id)
            .await?;

        let mut seasons: Vec<SeasonDto> = editions
            .into_iter()
            .filter_map(|(_, season)| season.map(season_dto))
            .collect();
        seasons.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        Ok(seasons)
    }

    /// Flags one season as current, clearing the previous flag in the
    /// same transaction so at most one season ever carries it.
    pub async fn set_current_season(&self, season_id: i32) -> Result<SeasonDto, Error> {
        let txn = self.db.begin().await?;

        let season_repo = SeasonRepository::new(&txn);

        season_repo
            .get(season_id)
            .await?
            .ok_or(CatalogError::SeasonNotFound(season_id))?;

        season_repo.clear_current().await?;

        let season = season_repo
            .mark_current(season_id)
            .await?
            .ok_or(CatalogError::SeasonNotFound(season_id))?;

        txn.commit().await?;

        Ok(season_dto(season))
    }

    /// Resolves a temporal context to a concrete season row.
    pub async fn resolve_season(
        &self,
        ctx: TemporalContext,
    ) -> Result<entity::season::Model, Error> {
        let season_repo = SeasonRepository::new(self.db);

        match ctx {
            TemporalContext::Current => season_repo
                .get_current()
                .await?
                // No competition in scope here, hence the sentinel zero.
                .ok_or_else(|| CatalogError::NoCurrentSeason(0).into()),
            TemporalContext::Season(season_id) => season_repo
                .get(season_id)
                .await?
                .ok_or_else(|| CatalogError::SeasonNotFound(season_id).into()),
        }
    }

    /// Resolves a temporal context against one competition, yielding the
    /// edition (competition_season) and its season window.
    pub async fn resolve_edition(
        &self,
        competition_id: i32,
        ctx: TemporalContext,
    ) -> Result<(entity::competition_season::Model, entity::season::Model), Error> {
        let season = match ctx {
            TemporalContext::Current => SeasonRepository::new(self.db)
                .get_current()
                .await?
                .ok_or(CatalogError::NoCurrentSeason(competition_id))?,
            TemporalContext::Season(season_id) => SeasonRepository::new(self.db)
                .get(season_id)
                .await?
                .ok_or(CatalogError::SeasonNotFound(season_id))?,
        };

        let edition = CompetitionSeasonRepository::new(self.db)
            .get_by_pair(competition_id, season.id)
            .await?
            .ok_or(CatalogError::CompetitionSeasonNotFound {
                competition_id,
                season_id: season.id,
            })?;

        Ok((edition, season))
    }
}

fn season_dto(season: entity::season::Model) -> SeasonDto {
    SeasonDto {
        id: season.id,
        label: season.label,
        start_date: season.start_date,
        end_date: season.end_date,
        is_current: season.is_current,
    }
}

#[cfg(test)]
mod tests {
    mod set_current_season {
        use pitchside_test_utils::prelude::*;

        use crate::server::{
            error::{catalog::CatalogError, Error},
            service::catalog::season::SeasonService,
        };

        /// Marking a season current drops the flag from the previous one
        #[tokio::test]
        async fn moves_the_current_flag() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let old_season = insert_season(
                &test.db,
                "2024/25",
                date(2024, 8, 1),
                date(2025, 6, 30),
                true,
            )
            .await?;
            let new_season = insert_season(
                &test.db,
                "2025/26",
                date(2025, 8, 1),
                date(2026, 6, 30),
                false,
            )
            .await?;

            let season_service = SeasonService::new(&test.db);
            let marked = season_service.set_current_season(new_season.id).await?;

            assert!(marked.is_current);

            let seasons = season_service.list().await?;
            let flagged: Vec<i32> = seasons
                .iter()
                .filter(|s| s.is_current)
                .map(|s| s.id)
                .collect();

            assert_eq!(flagged, vec![new_season.id]);
            assert_ne!(old_season.id, new_season.id);

            Ok(())
        }

        /// An unknown season id leaves the previous flag untouched
        #[tokio::test]
        async fn fails_for_unknown_season() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let season = insert_season(
                &test.db,
                "2024/25",
                date(2024, 8, 1),
                date(2025, 6, 30),
                true,
            )
            .await?;

            let season_service = SeasonService::new(&test.db);
            let result = season_service.set_current_season(season.id + 1).await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(CatalogError::SeasonNotFound(_)))
            ));

            let current = season_service.list().await?;
            assert!(current.iter().any(|s| s.id == season.id && s.is_current));

            Ok(())
        }
    }

    mod resolve_edition {
        use pitchside_test_utils::prelude::*;

        use crate::server::{
            error::{catalog::CatalogError, Error},
            model::temporal::TemporalContext,
            service::catalog::season::SeasonService,
        };

        /// Current context resolves to the flagged season's edition
        #[tokio::test]
        async fn resolves_current_edition() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let competition = insert_competition(&test.db, "premier").await?;
            let old_season = insert_season(
                &test.db,
                "2023/24",
                date(2023, 8, 1),
                date(2024, 6, 30),
                false,
            )
            .await?;
            let current_season = insert_season(
                &test.db,
                "2024/25",
                date(2024, 8, 1),
                date(2025, 6, 30),
                true,
            )
            .await?;
            insert_competition_season(&test.db, competition.id, old_season.id).await?;
            let current_edition =
                insert_competition_season(&test.db, competition.id, current_season.id).await?;

            let season_service = SeasonService::new(&test.db);
            let (edition, season) = season_service
                .resolve_edition(competition.id, TemporalContext::Current)
                .await?;

            assert_eq!(edition.id, current_edition.id);
            assert_eq!(season.label, "2024/25");

            Ok(())
        }

        /// An unlinked season yields CompetitionSeasonNotFound
        #[tokio::test]
        async fn fails_for_unlinked_season() -> Result<(), TestError> {
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

            let season_service = SeasonService::new(&test.db);
            let result = season_service
                .resolve_edition(competition.id, TemporalContext::Season(season.id))
                .await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(
                    CatalogError::CompetitionSeasonNotFound { .. }
                ))
            ));

            Ok(())
        }

        /// Current context with no flagged season yields NoCurrentSeason
        #[tokio::test]
        async fn fails_without_current_season() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let competition = insert_competition(&test.db, "premier").await?;

            let season_service = SeasonService::new(&test.db);
            let result = season_service
                .resolve_edition(competition.id, TemporalContext::Current)
                .await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(CatalogError::NoCurrentSeason(_)))
            ));

            Ok(())
        }
    }
}

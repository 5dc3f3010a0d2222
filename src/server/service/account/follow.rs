use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::enums::EntityType;

use crate::{
    model::{
        account::{FollowDto, FollowRequestDto, FollowStateDto},
        catalog::{EntityTypeDto, FixtureDto},
    },
    server::{
        data::{account::follow::FollowRepository, stats::fixture::FixtureRepository},
        error::{catalog::CatalogError, Error},
        service::{catalog::entity::EntityService, entitlement::usage::UsageService},
    },
};

/// Follows and the fixture feed they power.
pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Follows an entity, idempotently. Refollowing something already
    /// followed succeeds without touching the quota; a genuinely new
    /// follow needs a free slot under the tier's cap.
    pub async fn follow(
        &self,
        account_id: i32,
        request: FollowRequestDto,
    ) -> Result<FollowStateDto, Error> {
        let entity_type: EntityType = request.entity_type.into();

        if !EntityService::new(self.db)
            .exists(entity_type, request.entity_id)
            .await?
        {
            return Err(CatalogError::EntityNotFound {
                entity_type: format!("{:?}", request.entity_type).to_lowercase(),
                slug: request.entity_id.to_string(),
            }
            .into());
        }

        let follow_repo = FollowRepository::new(self.db);

        if follow_repo
            .exists(account_id, entity_type, request.entity_id)
            .await?
        {
            return Ok(FollowStateDto { following: true });
        }

        UsageService::new(self.db)
            .require_follow_slot(account_id)
            .await?;

        follow_repo
            .create(account_id, entity_type, request.entity_id)
            .await?;

        Ok(FollowStateDto { following: true })
    }

    /// Unfollowing something not followed is a no-op.
    pub async fn unfollow(
        &self,
        account_id: i32,
        request: FollowRequestDto,
    ) -> Result<FollowStateDto, Error> {
        FollowRepository::new(self.db)
            .delete(account_id, request.entity_type.into(), request.entity_id)
            .await?;

        Ok(FollowStateDto { following: false })
    }

    pub async fn list(&self, account_id: i32) -> Result<Vec<FollowDto>, Error> {
        let follows = FollowRepository::new(self.db)
            .list_for_account(account_id)
            .await?;

        Ok(follows
            .into_iter()
            .map(|follow| FollowDto {
                entity_type: entity_type_dto(follow.entity_type),
                entity_id: follow.entity_id,
                created_at: follow.created_at,
            })
            .collect())
    }

    pub async fn state(
        &self,
        account_id: i32,
        entity_type: EntityTypeDto,
        entity_id: i32,
    ) -> Result<FollowStateDto, Error> {
        let following = FollowRepository::new(self.db)
            .exists(account_id, entity_type.into(), entity_id)
            .await?;

        Ok(FollowStateDto { following })
    }

    /// Upcoming fixtures of followed teams, soonest first.
    pub async fn fixture_feed(
        &self,
        account_id: i32,
        limit: u64,
    ) -> Result<Vec<FixtureDto>, Error> {
        let team_follows = FollowRepository::new(self.db)
            .list_for_account_of_type(account_id, EntityType::Team)
            .await?;

        let team_ids = team_follows.iter().map(|f| f.entity_id).collect::<Vec<_>>();

        if team_ids.is_empty() {
            return Ok(vec![]);
        }

        let fixtures = FixtureRepository::new(self.db)
            .upcoming_for_teams(team_ids, Utc::now().naive_utc(), limit)
            .await?;

        Ok(fixtures.into_iter().map(FixtureDto::from).collect())
    }
}

fn entity_type_dto(entity_type: EntityType) -> EntityTypeDto {
    match entity_type {
        EntityType::Player => EntityTypeDto::Player,
        EntityType::Team => EntityTypeDto::Team,
        EntityType::Competition => EntityTypeDto::Competition,
    }
}

#[cfg(test)]
mod tests {
    mod follow {
        use pitchside_test_utils::prelude::*;

        use crate::{
            model::{account::FollowRequestDto, catalog::EntityTypeDto},
            server::{
                error::{catalog::CatalogError, entitlement::EntitlementError, Error},
                service::account::follow::FollowService,
            },
        };

        /// Following a team that does not exist is a 404
        #[tokio::test]
        async fn rejects_unknown_entity() -> Result<(), TestError> {
            let test = test_context_with_all_tables().await?;
            let account = insert_account(&test.db, "fan@example.com").await?;

            let follow_service = FollowService::new(&test.db);
            let result = follow_service
                .follow(
                    account.id,
                    FollowRequestDto {
                        entity_type: EntityTypeDto::Team,
                        entity_id: 99,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(CatalogError::EntityNotFound { .. }))
            ));

            Ok(())
        }

        /// Refollowing at the cap succeeds because it consumes nothing
        #[tokio::test]
        async fn refollow_bypasses_quota() -> Result<(), TestError> {
            let test = test_context_with_all_tables().await?;
            let account = insert_account(&test.db, "fan@example.com").await?;
            let mut first_team_id = None;
            for n in 0..10 {
                let team = insert_team(&test.db, &format!("team-{n}")).await?;
                insert_follow(
                    &test.db,
                    account.id,
                    entity::enums::EntityType::Team,
                    team.id,
                )
                .await?;
                first_team_id.get_or_insert(team.id);
            }
            let eleventh = insert_team(&test.db, "one-too-many").await?;

            let follow_service = FollowService::new(&test.db);
            let refollow = follow_service
                .follow(
                    account.id,
                    FollowRequestDto {
                        entity_type: EntityTypeDto::Team,
                        entity_id: first_team_id
                            .ok_or_else(|| TestError::Setup("no team inserted".into()))?,
                    },
                )
                .await;
            let new_follow = follow_service
                .follow(
                    account.id,
                    FollowRequestDto {
                        entity_type: EntityTypeDto::Team,
                        entity_id: eleventh.id,
                    },
                )
                .await;

            assert!(refollow.is_ok());
            assert!(matches!(
                new_follow,
                Err(Error::EntitlementError(EntitlementError::QuotaExceeded { .. }))
            ));

            Ok(())
        }
    }

    mod fixture_feed {
        use pitchside_test_utils::prelude::*;

        use crate::server::service::account::follow::FollowService;

        /// The feed lists only upcoming fixtures of followed teams
        #[tokio::test]
        async fn lists_upcoming_for_followed_teams() -> Result<(), TestError> {
            let test = test_context_with_all_tables().await?;
            let account = insert_account(&test.db, "fan@example.com").await?;
            let competition = insert_competition(&test.db, "premier").await?;
            let season = insert_season(
                &test.db,
                "2026/27",
                date(2026, 8, 1),
                date(2027, 6, 30),
                true,
            )
            .await?;
            let edition = insert_competition_season(&test.db, competition.id, season.id).await?;
            let followed = insert_team(&test.db, "mersey").await?;
            let other_a = insert_team(&test.db, "albion").await?;
            let other_b = insert_team(&test.db, "zenith").await?;
            insert_follow(
                &test.db,
                account.id,
                entity::enums::EntityType::Team,
                followed.id,
            )
            .await?;

            // One upcoming fixture for the followed team, one already
            // played, one between strangers.
            insert_scheduled_fixture(
                &test.db,
                edition.id,
                followed.id,
                other_a.id,
                datetime(2099, 8, 15, 15, 0),
            )
            .await?;
            insert_finished_fixture(
                &test.db,
                edition.id,
                other_a.id,
                followed.id,
                datetime(2020, 8, 8, 15, 0),
                1,
                1,
            )
            .await?;
            insert_scheduled_fixture(
                &test.db,
                edition.id,
                other_a.id,
                other_b.id,
                datetime(2099, 8, 22, 15, 0),
            )
            .await?;

            let follow_service = FollowService::new(&test.db);
            let feed = follow_service.fixture_feed(account.id, 10).await?;

            assert_eq!(feed.len(), 1);
            assert_eq!(feed[0].home_team_id, followed.id);

            Ok(())
        }

        /// No team follows means an empty feed, not a full query
        #[tokio::test]
        async fn empty_without_follows() -> Result<(), TestError> {
            let test = test_context_with_all_tables().await?;
            let account = insert_account(&test.db, "fan@example.com").await?;

            let follow_service = FollowService::new(&test.db);
            let feed = follow_service.fixture_feed(account.id, 10).await?;

            assert!(feed.is_empty());

            Ok(())
        }
    }
}

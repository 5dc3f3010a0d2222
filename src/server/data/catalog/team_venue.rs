use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Home-ground ledger, same open/close contract as the player ledger.
pub struct TeamVenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamVenueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn open(
        &self,
        team_id: i32,
        venue_id: i32,
        valid_from: NaiveDate,
    ) -> Result<entity::team_venue_history::Model, DbErr> {
        let tenancy = entity::team_venue_history::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            venue_id: ActiveValue::Set(venue_id),
            valid_from: ActiveValue::Set(valid_from),
            valid_to: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tenancy.insert(self.db).await
    }

    pub async fn close(
        &self,
        tenancy_id: i32,
        valid_to: NaiveDate,
    ) -> Result<Option<entity::team_venue_history::Model>, DbErr> {
        let tenancy = match entity::prelude::TeamVenueHistory::find_by_id(tenancy_id)
            .one(self.db)
            .await?
        {
            Some(tenancy) => tenancy,
            None => return Ok(None),
        };

        let mut tenancy_am = tenancy.into_active_model();
        tenancy_am.valid_to = ActiveValue::Set(Some(valid_to));

        let tenancy = tenancy_am.update(self.db).await?;

        Ok(Some(tenancy))
    }

    pub async fn find_open(
        &self,
        team_id: i32,
    ) -> Result<Option<entity::team_venue_history::Model>, DbErr> {
        entity::prelude::TeamVenueHistory::find()
            .filter(entity::team_venue_history::Column::TeamId.eq(team_id))
            .filter(entity::team_venue_history::Column::ValidTo.is_null())
            .one(self.db)
            .await
    }

    /// The tenancy covering a given date, joined with its venue.
    pub async fn for_team_on(
        &self,
        team_id: i32,
        on: NaiveDate,
    ) -> Result<
        Option<(
            entity::team_venue_history::Model,
            Option<entity::venue::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TeamVenueHistory::find()
            .filter(entity::team_venue_history::Column::TeamId.eq(team_id))
            .filter(
                Condition::all()
                    .add(entity::team_venue_history::Column::ValidFrom.lte(on))
                    .add(
                        Condition::any()
                            .add(entity::team_venue_history::Column::ValidTo.is_null())
                            .add(entity::team_venue_history::Column::ValidTo.gte(on)),
                    ),
            )
            .find_also_related(entity::venue::Entity)
            .one(self.db)
            .await
    }

    /// Tenancies overlapping a date window, joined with their venues.
    pub async fn for_team_overlapping(
        &self,
        team_id: i32,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Result<
        Vec<(
            entity::team_venue_history::Model,
            Option<entity::venue::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TeamVenueHistory::find()
            .filter(entity::team_venue_history::Column::TeamId.eq(team_id))
            .filter(
                Condition::all()
                    .add(entity::team_venue_history::Column::ValidFrom.lte(window_end))
                    .add(
                        Condition::any()
                            .add(entity::team_venue_history::Column::ValidTo.is_null())
                            .add(entity::team_venue_history::Column::ValidTo.gte(window_start)),
                    ),
            )
            .order_by_asc(entity::team_venue_history::Column::ValidFrom)
            .find_also_related(entity::venue::Entity)
            .all(self.db)
            .await
    }

}

#[cfg(test)]
mod tests {
    mod for_team_on {
        use pitchside_test_utils::prelude::*;

        use crate::server::data::catalog::team_venue::TeamVenueRepository;

        /// Expect the historical ground for a past date and the current one
        /// for today
        #[tokio::test]
        async fn resolves_ground_by_date() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let team = insert_team(&test.db, "mersey").await?;
            let old_ground = insert_venue(&test.db, "old-road").await?;
            let new_ground = insert_venue(&test.db, "new-park").await?;

            let tenancy_repo = TeamVenueRepository::new(&test.db);
            let old_tenancy = tenancy_repo
                .open(team.id, old_ground.id, date(1990, 1, 1))
                .await?;
            tenancy_repo.close(old_tenancy.id, date(2010, 6, 30)).await?;
            tenancy_repo
                .open(team.id, new_ground.id, date(2010, 7, 1))
                .await?;

            let past = tenancy_repo.for_team_on(team.id, date(2005, 3, 1)).await?;
            let present = tenancy_repo.for_team_on(team.id, date(2024, 3, 1)).await?;

            assert_eq!(past.map(|(row, _)| row.venue_id), Some(old_ground.id));
            assert_eq!(present.map(|(row, _)| row.venue_id), Some(new_ground.id));

            Ok(())
        }
    }
}

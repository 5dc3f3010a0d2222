use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::EventKind;

pub struct FixtureEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        fixture_id: i32,
        team_id: i32,
        player_id: i32,
        minute: i32,
        kind: EventKind,
    ) -> Result<entity::fixture_event::Model, DbErr> {
        let event = entity::fixture_event::ActiveModel {
            fixture_id: ActiveValue::Set(fixture_id),
            team_id: ActiveValue::Set(team_id),
            player_id: ActiveValue::Set(player_id),
            minute: ActiveValue::Set(minute),
            kind: ActiveValue::Set(kind),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn list_for_fixture(
        &self,
        fixture_id: i32,
    ) -> Result<Vec<entity::fixture_event::Model>, DbErr> {
        entity::prelude::FixtureEvent::find()
            .filter(entity::fixture_event::Column::FixtureId.eq(fixture_id))
            .order_by_asc(entity::fixture_event::Column::Minute)
            .order_by_asc(entity::fixture_event::Column::Id)
            .all(self.db)
            .await
    }

    /// Events across a set of fixtures; the aggregator's input when
    /// recomputing player season stats.
    pub async fn list_for_fixtures(
        &self,
        fixture_ids: Vec<i32>,
    ) -> Result<Vec<entity::fixture_event::Model>, DbErr> {
        entity::prelude::FixtureEvent::find()
            .filter(entity::fixture_event::Column::FixtureId.is_in(fixture_ids))
            .all(self.db)
            .await
    }
}

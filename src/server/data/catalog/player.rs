use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Import-shaped player payload, keyed on slug.
pub struct PlayerUpsert {
    pub slug: String,
    pub name: String,
    pub position: String,
    pub country: String,
    pub date_of_birth: Option<NaiveDate>,
}

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert-or-update keyed on the slug's unique constraint, for seed
    /// and import paths.
    pub async fn upsert(&self, player: PlayerUpsert) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let row = entity::player::ActiveModel {
            slug: ActiveValue::Set(player.slug),
            name: ActiveValue::Set(player.name),
            position: ActiveValue::Set(player.position),
            country: ActiveValue::Set(player.country),
            date_of_birth: ActiveValue::Set(player.date_of_birth),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Player::insert(row)
            .on_conflict(
                OnConflict::column(entity::player::Column::Slug)
                    .update_columns([
                        entity::player::Column::Name,
                        entity::player::Column::Position,
                        entity::player::Column::Country,
                        entity::player::Column::DateOfBirth,
                        entity::player::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        player_ids: Vec<i32>,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids))
            .all(self.db)
            .await
    }

    pub async fn list(&self, limit: u64, offset: u64) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }
}

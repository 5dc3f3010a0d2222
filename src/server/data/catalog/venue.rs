use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Import-shaped venue payload, keyed on slug.
pub struct VenueUpsert {
    pub slug: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub capacity: Option<i32>,
}

pub struct VenueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert-or-update keyed on the slug's unique constraint, for seed
    /// and import paths.
    pub async fn upsert(&self, venue: VenueUpsert) -> Result<entity::venue::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let row = entity::venue::ActiveModel {
            slug: ActiveValue::Set(venue.slug),
            name: ActiveValue::Set(venue.name),
            city: ActiveValue::Set(venue.city),
            country: ActiveValue::Set(venue.country),
            capacity: ActiveValue::Set(venue.capacity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Venue::insert(row)
            .on_conflict(
                OnConflict::column(entity::venue::Column::Slug)
                    .update_columns([
                        entity::venue::Column::Name,
                        entity::venue::Column::City,
                        entity::venue::Column::Country,
                        entity::venue::Column::Capacity,
                        entity::venue::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(&self, venue_id: i32) -> Result<Option<entity::venue::Model>, DbErr> {
        entity::prelude::Venue::find_by_id(venue_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::venue::Model>, DbErr> {
        entity::prelude::Venue::find()
            .filter(entity::venue::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Import-shaped team payload, keyed on slug.
pub struct TeamUpsert {
    pub slug: String,
    pub name: String,
    pub short_name: String,
    pub country: String,
    pub founded: Option<i32>,
    pub logo_url: Option<String>,
}

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, team_id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_many(&self, team_ids: Vec<i32>) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .all(self.db)
            .await
    }

    pub async fn list(&self, limit: u64, offset: u64) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Insert-or-update keyed on the slug's unique constraint, for seed
    /// and import paths.
    pub async fn upsert(&self, team: TeamUpsert) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let row = entity::team::ActiveModel {
            slug: ActiveValue::Set(team.slug),
            name: ActiveValue::Set(team.name),
            short_name: ActiveValue::Set(team.short_name),
            country: ActiveValue::Set(team.country),
            founded: ActiveValue::Set(team.founded),
            logo_url: ActiveValue::Set(team.logo_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Team::insert(row)
            .on_conflict(
                OnConflict::column(entity::team::Column::Slug)
                    .update_columns([
                        entity::team::Column::Name,
                        entity::team::Column::ShortName,
                        entity::team::Column::Country,
                        entity::team::Column::Founded,
                        entity::team::Column::LogoUrl,
                        entity::team::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}

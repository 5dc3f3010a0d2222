use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Import-shaped competition payload, keyed on slug.
pub struct CompetitionUpsert {
    pub slug: String,
    pub name: String,
    pub country: String,
    pub logo_url: Option<String>,
}

pub struct CompetitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert-or-update keyed on the slug's unique constraint, for seed
    /// and import paths.
    pub async fn upsert(
        &self,
        competition: CompetitionUpsert,
    ) -> Result<entity::competition::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let row = entity::competition::ActiveModel {
            slug: ActiveValue::Set(competition.slug),
            name: ActiveValue::Set(competition.name),
            country: ActiveValue::Set(competition.country),
            logo_url: ActiveValue::Set(competition.logo_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Competition::insert(row)
            .on_conflict(
                OnConflict::column(entity::competition::Column::Slug)
                    .update_columns([
                        entity::competition::Column::Name,
                        entity::competition::Column::Country,
                        entity::competition::Column::LogoUrl,
                        entity::competition::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(
        &self,
        competition_id: i32,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find_by_id(competition_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .order_by_asc(entity::competition::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }
}

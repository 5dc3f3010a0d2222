use sea_orm::DatabaseConnection;

use entity::enums::EntityType;

use crate::{
    model::catalog::{EntityDto, EntityTypeDto},
    server::{
        data::catalog::{
            competition::CompetitionRepository, player::PlayerRepository, team::TeamRepository,
        },
        error::{catalog::CatalogError, Error},
    },
};

/// Slug-based resolution across the three followable entity kinds.
pub struct EntityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a slug to an entity of the requested kind, or 404.
    pub async fn resolve(
        &self,
        entity_type: EntityTypeDto,
        slug: &str,
    ) -> Result<EntityDto, Error> {
        let found = match entity_type {
            EntityTypeDto::Player => PlayerRepository::new(self.db)
                .get_by_slug(slug)
                .await?
                .map(|p| EntityDto {
                    id: p.id,
                    entity_type,
                    slug: p.slug,
                    name: p.name,
                }),
            EntityTypeDto::Team => TeamRepository::new(self.db)
                .get_by_slug(slug)
                .await?
                .map(|t| EntityDto {
                    id: t.id,
                    entity_type,
                    slug: t.slug,
                    name: t.name,
                }),
            EntityTypeDto::Competition => CompetitionRepository::new(self.db)
                .get_by_slug(slug)
                .await?
                .map(|c| EntityDto {
                    id: c.id,
                    entity_type,
                    slug: c.slug,
                    name: c.name,
                }),
        };

        found.ok_or_else(|| {
            CatalogError::EntityNotFound {
                entity_type: format!("{:?}", entity_type).to_lowercase(),
                slug: slug.to_string(),
            }
            .into()
        })
    }

    /// ID-based existence check; the follow glue validates targets with it.
    pub async fn exists(&self, entity_type: EntityType, entity_id: i32) -> Result<bool, Error> {
        let found = match entity_type {
            EntityType::Player => PlayerRepository::new(self.db).get(entity_id).await?.is_some(),
            EntityType::Team => TeamRepository::new(self.db).get(entity_id).await?.is_some(),
            EntityType::Competition => CompetitionRepository::new(self.db)
                .get(entity_id)
                .await?
                .is_some(),
        };

        Ok(found)
    }
}

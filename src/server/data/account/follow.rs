use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::EntityType;

pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert-or-ignore on the (account, entity_type, entity_id) key.
    /// Returns false when the follow already existed.
    pub async fn create(
        &self,
        account_id: i32,
        entity_type: EntityType,
        entity_id: i32,
    ) -> Result<bool, DbErr> {
        let follow = entity::follow::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            entity_type: ActiveValue::Set(entity_type),
            entity_id: ActiveValue::Set(entity_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = entity::prelude::Follow::insert(follow)
            .on_conflict(
                OnConflict::columns([
                    entity::follow::Column::AccountId,
                    entity::follow::Column::EntityType,
                    entity::follow::Column::EntityId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn delete(
        &self,
        account_id: i32,
        entity_type: EntityType,
        entity_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::AccountId.eq(account_id))
            .filter(entity::follow::Column::EntityType.eq(entity_type))
            .filter(entity::follow::Column::EntityId.eq(entity_id))
            .exec(self.db)
            .await
    }

    pub async fn exists(
        &self,
        account_id: i32,
        entity_type: EntityType,
        entity_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::AccountId.eq(account_id))
            .filter(entity::follow::Column::EntityType.eq(entity_type))
            .filter(entity::follow::Column::EntityId.eq(entity_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// The live follow count, the number the follow cap is checked
    /// against.
    pub async fn count_for_account(&self, account_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::AccountId.eq(account_id))
            .count(self.db)
            .await
    }

    pub async fn list_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::follow::Model>, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::AccountId.eq(account_id))
            .order_by_asc(entity::follow::Column::CreatedAt)
            .order_by_asc(entity::follow::Column::Id)
            .all(self.db)
            .await
    }

    /// Reverse lookup: every account following one entity. Feeds result
    /// notifications.
    pub async fn followers_of(
        &self,
        entity_type: EntityType,
        entity_id: i32,
    ) -> Result<Vec<entity::follow::Model>, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::EntityType.eq(entity_type))
            .filter(entity::follow::Column::EntityId.eq(entity_id))
            .all(self.db)
            .await
    }

    pub async fn list_for_account_of_type(
        &self,
        account_id: i32,
        entity_type: EntityType,
    ) -> Result<Vec<entity::follow::Model>, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::AccountId.eq(account_id))
            .filter(entity::follow::Column::EntityType.eq(entity_type))
            .all(self.db)
            .await
    }
}

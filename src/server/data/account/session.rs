use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        account_id: i32,
        token: &str,
        device: Option<String>,
        expires_at: NaiveDateTime,
    ) -> Result<entity::session::Model, DbErr> {
        let session = entity::session::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            token: ActiveValue::Set(token.to_string()),
            device: ActiveValue::Set(device),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        };

        session.insert(self.db).await
    }

    /// Raw lookup by token; expiry is the service's concern.
    pub async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    pub async fn get_for_account(
        &self,
        session_id: i32,
        account_id: i32,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find_by_id(session_id)
            .filter(entity::session::Column::AccountId.eq(account_id))
            .one(self.db)
            .await
    }

    pub async fn list_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::AccountId.eq(account_id))
            .order_by_desc(entity::session::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, session_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_by_id(session_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_token(&self, token: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_many()
            .filter(entity::session::Column::Token.eq(token))
            .exec(self.db)
            .await
    }

    pub async fn delete_all_for_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_many()
            .filter(entity::session::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}

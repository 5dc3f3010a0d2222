use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        account_id: i32,
        kind: &str,
        message: &str,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            kind: ActiveValue::Set(kind.to_string()),
            message: ActiveValue::Set(message.to_string()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    pub async fn list_for_account(
        &self,
        account_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    pub async fn unread_count(&self, account_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one notification read, scoped to the owning account.
    pub async fn mark_read(
        &self,
        notification_id: i32,
        account_id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        let notification = match entity::prelude::Notification::find_by_id(notification_id)
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .one(self.db)
            .await?
        {
            Some(notification) => notification,
            None => return Ok(None),
        };

        let mut notification_am = notification.into_active_model();
        notification_am.read = ActiveValue::Set(true);

        let notification = notification_am.update(self.db).await?;

        Ok(Some(notification))
    }

    pub async fn mark_all_read(&self, account_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(
                entity::notification::Column::Read,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::notification::Column::AccountId.eq(account_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    mod mark_read {
        use pitchside_test_utils::prelude::*;

        use crate::server::data::account::notification::NotificationRepository;

        /// Another account cannot mark someone else's notification
        #[tokio::test]
        async fn scopes_by_account() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let owner = insert_account(&test.db, "fan@example.com").await?;
            let other = insert_account(&test.db, "other@example.com").await?;
            let notification =
                insert_notification(&test.db, owner.id, "kickoff", "Match starts soon").await?;

            let notification_repo = NotificationRepository::new(&test.db);
            let denied = notification_repo.mark_read(notification.id, other.id).await?;
            let allowed = notification_repo.mark_read(notification.id, owner.id).await?;

            assert!(denied.is_none());
            assert_eq!(allowed.map(|n| n.read), Some(true));

            Ok(())
        }
    }

    mod mark_all_read {
        use pitchside_test_utils::prelude::*;

        use crate::server::data::account::notification::NotificationRepository;

        /// Expect every unread notification to flip and the count to drop
        /// to zero
        #[tokio::test]
        async fn clears_unread_count() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let account = insert_account(&test.db, "fan@example.com").await?;
            insert_notification(&test.db, account.id, "kickoff", "Match starts soon").await?;
            insert_notification(&test.db, account.id, "result", "Full time 2-1").await?;

            let notification_repo = NotificationRepository::new(&test.db);
            let flipped = notification_repo.mark_all_read(account.id).await?;

            assert_eq!(flipped, 2);
            assert_eq!(notification_repo.unread_count(account.id).await?, 0);

            Ok(())
        }
    }
}

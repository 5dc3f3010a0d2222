use sea_orm::DatabaseConnection;

use crate::{
    model::account::NotificationDto,
    server::{
        data::account::notification::NotificationRepository,
        error::{auth::AuthError, Error},
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        account_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<NotificationDto>, Error> {
        let notifications = NotificationRepository::new(self.db)
            .list_for_account(account_id, limit, offset)
            .await?;

        Ok(notifications
            .into_iter()
            .map(|notification| NotificationDto {
                id: notification.id,
                kind: notification.kind,
                message: notification.message,
                read: notification.read,
                created_at: notification.created_at,
            })
            .collect())
    }

    pub async fn unread_count(&self, account_id: i32) -> Result<u64, Error> {
        let count = NotificationRepository::new(self.db)
            .unread_count(account_id)
            .await?;

        Ok(count)
    }

    pub async fn mark_read(
        &self,
        account_id: i32,
        notification_id: i32,
    ) -> Result<NotificationDto, Error> {
        let notification = NotificationRepository::new(self.db)
            .mark_read(notification_id, account_id)
            .await?
            .ok_or(AuthError::NotificationNotFound(notification_id))?;

        Ok(NotificationDto {
            id: notification.id,
            kind: notification.kind,
            message: notification.message,
            read: notification.read,
            created_at: notification.created_at,
        })
    }

    pub async fn mark_all_read(&self, account_id: i32) -> Result<u64, Error> {
        let flipped = NotificationRepository::new(self.db)
            .mark_all_read(account_id)
            .await?;

        Ok(flipped)
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Generic over the connection so the password change can run inside a
/// transaction together with the session purge.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        email: &str,
        display_name: &str,
        password_hash: &str,
    ) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn get(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn update_password(
        &self,
        account_id: i32,
        password_hash: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        let account = match entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?
        {
            Some(account) => account,
            None => return Ok(None),
        };

        let mut account_am = account.into_active_model();
        account_am.password_hash = ActiveValue::Set(password_hash.to_string());
        account_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let account = account_am.update(self.db).await?;

        Ok(Some(account))
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use pitchside_test_utils::prelude::*;

        use crate::server::data::account::account::AccountRepository;

        /// Expect a second account with the same email to be rejected by
        /// the unique constraint
        #[tokio::test]
        async fn rejects_duplicate_email() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;

            let account_repo = AccountRepository::new(&test.db);
            account_repo
                .create("fan@example.com", "fan", DUMMY_PASSWORD_HASH)
                .await?;
            let result = account_repo
                .create("fan@example.com", "other", DUMMY_PASSWORD_HASH)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update_password {
        use pitchside_test_utils::prelude::*;

        use crate::server::data::account::account::AccountRepository;

        /// Expect the stored hash to change
        #[tokio::test]
        async fn replaces_hash() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let account = insert_account(&test.db, "fan@example.com").await?;

            let account_repo = AccountRepository::new(&test.db);
            let updated = account_repo
                .update_password(account.id, "$argon2id$new-hash")
                .await?;

            assert_eq!(
                updated.map(|a| a.password_hash),
                Some("$argon2id$new-hash".to_string())
            );

            Ok(())
        }

        /// Expect Ok(None) for an account that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_account() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;

            let account_repo = AccountRepository::new(&test.db);
            let updated = account_repo.update_password(7, "$argon2id$new-hash").await?;

            assert!(updated.is_none());

            Ok(())
        }
    }
}

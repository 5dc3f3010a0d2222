use chrono::{Days, NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::account::{
        AccountDto, ChangePasswordDto, LoginDto, RegisterDto, SessionDto, TokenDto,
    },
    server::{
        data::account::{account::AccountRepository, session::SessionRepository},
        error::{auth::AuthError, Error},
        util::{
            password::{hash_password, verify_password},
            token::generate_session_token,
        },
    },
};

const MIN_PASSWORD_LEN: usize = 8;

/// Registration, login, and session lifecycle.
///
/// Sessions are opaque bearer tokens stored server-side with an absolute
/// expiry; an expired row is indistinguishable from a missing one to the
/// caller and is deleted on sight.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    session_ttl_days: i64,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, session_ttl_days: i64) -> Self {
        Self {
            db,
            session_ttl_days,
        }
    }

    fn session_expiry(&self, now: NaiveDateTime) -> Result<NaiveDateTime, Error> {
        now.checked_add_days(Days::new(self.session_ttl_days.max(0) as u64))
            .ok_or_else(|| Error::Validation("Session expiry out of range".to_string()))
    }

    pub async fn register(
        &self,
        request: RegisterDto,
    ) -> Result<(AccountDto, TokenDto), Error> {
        let email = request.email.trim().to_lowercase();

        if !email.contains('@') {
            return Err(Error::Validation("Invalid email address".to_string()));
        }
        if request.display_name.trim().is_empty() {
            return Err(Error::Validation("Display name cannot be empty".to_string()));
        }
        if request.password.len() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let account_repo = AccountRepository::new(self.db);

        if account_repo.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&request.password)?;
        let account = account_repo
            .create(&email, request.display_name.trim(), &password_hash)
            .await?;

        let token = self.issue_session(account.id, None).await?;

        Ok((
            AccountDto {
                id: account.id,
                email: account.email,
                display_name: account.display_name,
            },
            token,
        ))
    }

    pub async fn login(&self, request: LoginDto) -> Result<TokenDto, Error> {
        let email = request.email.trim().to_lowercase();

        let account = AccountRepository::new(self.db)
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&request.password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_session(account.id, request.device).await
    }

    /// Resolves a bearer token to its account. Expired sessions are
    /// deleted opportunistically and answered exactly like unknown tokens.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> Result<(entity::account::Model, entity::session::Model), Error> {
        let session_repo = SessionRepository::new(self.db);

        let session = session_repo
            .get_by_token(token)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if session.expires_at <= Utc::now().naive_utc() {
            session_repo.delete(session.id).await?;
            return Err(AuthError::Unauthorized.into());
        }

        let account = AccountRepository::new(self.db)
            .get(session.account_id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        Ok((account, session))
    }

    pub async fn logout(&self, token: &str) -> Result<(), Error> {
        SessionRepository::new(self.db).delete_by_token(token).await?;

        Ok(())
    }

    pub async fn list_sessions(
        &self,
        account_id: i32,
        current_session_id: i32,
    ) -> Result<Vec<SessionDto>, Error> {
        let sessions = SessionRepository::new(self.db)
            .list_for_account(account_id)
            .await?;

        Ok(sessions
            .into_iter()
            .map(|session| SessionDto {
                id: session.id,
                device: session.device,
                created_at: session.created_at,
                expires_at: session.expires_at,
                current: session.id == current_session_id,
            })
            .collect())
    }

    /// Revokes one of the account's other sessions. The current session
    /// must use logout so the caller can't lock themselves out by
    /// accident.
    pub async fn revoke_session(
        &self,
        account_id: i32,
        session_id: i32,
        current_session_id: i32,
    ) -> Result<(), Error> {
        if session_id == current_session_id {
            return Err(AuthError::SessionSelfRevoke.into());
        }

        let session_repo = SessionRepository::new(self.db);

        session_repo
            .get_for_account(session_id, account_id)
            .await?
            .ok_or(AuthError::SessionNotFound(session_id))?;

        session_repo.delete(session_id).await?;

        Ok(())
    }

    /// Changes the password and revokes every session, issuing one fresh
    /// session in the same transaction.
    pub async fn change_password(
        &self,
        account_id: i32,
        request: ChangePasswordDto,
    ) -> Result<TokenDto, Error> {
        if request.new_password.len() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let account = AccountRepository::new(self.db)
            .get(account_id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if !verify_password(&request.current_password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = hash_password(&request.new_password)?;
        let token = generate_session_token();
        let expires_at = self.session_expiry(Utc::now().naive_utc())?;

        let txn = self.db.begin().await?;

        AccountRepository::new(&txn)
            .update_password(account_id, &password_hash)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let session_repo = SessionRepository::new(&txn);
        session_repo.delete_all_for_account(account_id).await?;
        let session = session_repo
            .create(account_id, &token, request.device, expires_at)
            .await?;

        txn.commit().await?;

        Ok(TokenDto {
            token,
            expires_at: session.expires_at,
        })
    }

    async fn issue_session(
        &self,
        account_id: i32,
        device: Option<String>,
    ) -> Result<TokenDto, Error> {
        let token = generate_session_token();
        let expires_at = self.session_expiry(Utc::now().naive_utc())?;

        let session = SessionRepository::new(self.db)
            .create(account_id, &token, device, expires_at)
            .await?;

        Ok(TokenDto {
            token,
            expires_at: session.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use pitchside_test_utils::prelude::*;

    use crate::{
        model::account::RegisterDto,
        server::service::account::auth::AuthService,
    };

    async fn register_fan(
        db: &sea_orm::DatabaseConnection,
    ) -> Result<(crate::model::account::AccountDto, crate::model::account::TokenDto), TestError>
    {
        let auth_service = AuthService::new(db, 30);

        auth_service
            .register(RegisterDto {
                email: "fan@example.com".to_string(),
                display_name: "Fan".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .map_err(|e| TestError::Setup(e.to_string()))
    }

    mod register {
        use super::*;
        use crate::server::error::{auth::AuthError, Error};

        /// Registration issues a usable session token
        #[tokio::test]
        async fn issues_session_token() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let (account, token) = register_fan(&test.db).await?;

            let auth_service = AuthService::new(&test.db, 30);
            let (authenticated, _) = auth_service
                .authenticate(&token.token)
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;

            assert_eq!(authenticated.id, account.id);

            Ok(())
        }

        /// A taken email is a conflict, not a validation error
        #[tokio::test]
        async fn rejects_taken_email() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            register_fan(&test.db).await?;

            let auth_service = AuthService::new(&test.db, 30);
            let result = auth_service
                .register(RegisterDto {
                    email: "FAN@example.com".to_string(),
                    display_name: "Other".to_string(),
                    password: "another pass".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::EmailTaken))
            ));

            Ok(())
        }

        /// Short passwords are rejected before any storage access
        #[tokio::test]
        async fn rejects_short_password() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;

            let auth_service = AuthService::new(&test.db, 30);
            let result = auth_service
                .register(RegisterDto {
                    email: "fan@example.com".to_string(),
                    display_name: "Fan".to_string(),
                    password: "short".to_string(),
                })
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }

    mod login {
        use super::*;
        use crate::{
            model::account::LoginDto,
            server::error::{auth::AuthError, Error},
        };

        /// A wrong password and an unknown email fail identically
        #[tokio::test]
        async fn wrong_password_and_unknown_email_match() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            register_fan(&test.db).await?;

            let auth_service = AuthService::new(&test.db, 30);
            let wrong_password = auth_service
                .login(LoginDto {
                    email: "fan@example.com".to_string(),
                    password: "wrong horse".to_string(),
                    device: None,
                })
                .await;
            let unknown_email = auth_service
                .login(LoginDto {
                    email: "ghost@example.com".to_string(),
                    password: "correct horse".to_string(),
                    device: None,
                })
                .await;

            assert!(matches!(
                wrong_password,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));
            assert!(matches!(
                unknown_email,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }
    }

    mod authenticate {
        use super::*;
        use crate::server::{
            data::account::session::SessionRepository,
            error::{auth::AuthError, Error},
        };

        /// An expired session is refused and deleted on sight
        #[tokio::test]
        async fn expired_session_is_deleted() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let account = insert_account(&test.db, "fan@example.com").await?;
            insert_session(&test.db, account.id, "stale-token", datetime(2020, 1, 1, 0, 0))
                .await?;

            let auth_service = AuthService::new(&test.db, 30);
            let result = auth_service.authenticate("stale-token").await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::Unauthorized))
            ));
            let leftover = SessionRepository::new(&test.db)
                .get_by_token("stale-token")
                .await?;
            assert!(leftover.is_none());

            Ok(())
        }

        /// An unknown token is refused with the same error
        #[tokio::test]
        async fn unknown_token_is_unauthorized() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;

            let auth_service = AuthService::new(&test.db, 30);
            let result = auth_service.authenticate("never-issued").await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::Unauthorized))
            ));

            Ok(())
        }
    }

    mod change_password {
        use super::*;
        use crate::{
            model::account::{ChangePasswordDto, LoginDto},
            server::data::account::session::SessionRepository,
        };

        /// Changing the password revokes every old session and issues a
        /// fresh one; the old password stops working
        #[tokio::test]
        async fn rotates_sessions_and_hash() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let (account, old_token) = register_fan(&test.db).await?;

            let auth_service = AuthService::new(&test.db, 30);
            // A second device logged in before the change.
            auth_service
                .login(LoginDto {
                    email: "fan@example.com".to_string(),
                    password: "correct horse".to_string(),
                    device: Some("tablet".to_string()),
                })
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;

            let new_token = auth_service
                .change_password(
                    account.id,
                    ChangePasswordDto {
                        current_password: "correct horse".to_string(),
                        new_password: "fresh stable pass".to_string(),
                        device: None,
                    },
                )
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;

            let sessions = SessionRepository::new(&test.db)
                .list_for_account(account.id)
                .await?;
            assert_eq!(sessions.len(), 1);

            assert!(auth_service.authenticate(&old_token.token).await.is_err());
            assert!(auth_service.authenticate(&new_token.token).await.is_ok());

            let old_login = auth_service
                .login(LoginDto {
                    email: "fan@example.com".to_string(),
                    password: "correct horse".to_string(),
                    device: None,
                })
                .await;
            assert!(old_login.is_err());

            Ok(())
        }
    }

    mod revoke_session {
        use super::*;
        use crate::{
            model::account::LoginDto,
            server::error::{auth::AuthError, Error},
        };

        /// The current session cannot revoke itself
        #[tokio::test]
        async fn refuses_self_revoke() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let (account, token) = register_fan(&test.db).await?;

            let auth_service = AuthService::new(&test.db, 30);
            let (_, session) = auth_service
                .authenticate(&token.token)
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;

            let result = auth_service
                .revoke_session(account.id, session.id, session.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::SessionSelfRevoke))
            ));

            Ok(())
        }

        /// Revoking another session works and leaves the current one alive
        #[tokio::test]
        async fn revokes_other_session() -> Result<(), TestError> {
            let test = test_context_with_account_tables().await?;
            let (account, token) = register_fan(&test.db).await?;

            let auth_service = AuthService::new(&test.db, 30);
            let other = auth_service
                .login(LoginDto {
                    email: "fan@example.com".to_string(),
                    password: "correct horse".to_string(),
                    device: Some("tablet".to_string()),
                })
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;
            let (_, other_session) = auth_service
                .authenticate(&other.token)
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;
            let (_, current_session) = auth_service
                .authenticate(&token.token)
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;

            auth_service
                .revoke_session(account.id, other_session.id, current_session.id)
                .await
                .map_err(|e| TestError::Setup(e.to_string()))?;

            assert!(auth_service.authenticate(&other.token).await.is_err());
            assert!(auth_service.authenticate(&token.token).await.is_ok());

            Ok(())
        }
    }
}

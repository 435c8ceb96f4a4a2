use chrono::Utc;
use keystone_core::{
    AccountStore, AccountView, LoginRequest, PasswordHasher, SessionClaims, SessionToken,
    SessionTokenCodec,
};

use super::AccountUseCase;
use crate::error::{AccountError, internal, store_failure};

/// Successful login: the account and a freshly issued session token.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub account: AccountView,
    pub token: SessionToken,
}

impl<S, H, C> AccountUseCase<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    /// Check credentials and issue a session token.
    ///
    /// An unknown email is [`AccountError::NotFound`]; a wrong password is
    /// [`AccountError::Unauthorized`]. No token is produced on any failure.
    #[tracing::instrument(name = "AccountUseCase::login", skip_all)]
    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, AccountError> {
        let account = self
            .store
            .find_by_email(&request.email)
            .await
            .map_err(store_failure)?;

        if !self.hasher.verify(&request.password, &account.password).await {
            tracing::debug!(account_id = %account.id, "Password mismatch");
            return Err(AccountError::Unauthorized);
        }

        let claims = SessionClaims::new(
            account.id,
            account.email.as_str().to_owned(),
            Utc::now(),
            self.session_ttl,
        )
        .map_err(internal("Session expiry out of range"))?;

        let token = self
            .codec
            .issue(&claims)
            .map_err(internal("Failed to sign session token"))?;

        Ok(LoginOutcome {
            account: account.view(),
            token,
        })
    }
}

use chrono::Utc;
use keystone_core::{
    Account, AccountStore, AccountStoreError, AccountView, NewAccount, PasswordHasher,
    RegisterRequest, SessionTokenCodec,
};

use super::AccountUseCase;
use crate::error::{AccountError, internal, store_failure};

impl<S, H, C> AccountUseCase<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    /// Register a new account.
    ///
    /// # Returns
    /// The stored account with its password stripped, or
    /// [`AccountError::Conflict`] if the email is already registered.
    #[tracing::instrument(name = "AccountUseCase::register", skip_all)]
    pub async fn register(&self, request: RegisterRequest) -> Result<AccountView, AccountError> {
        match self.store.find_by_email(&request.email).await {
            Ok(_) => return Err(AccountError::Conflict),
            Err(AccountStoreError::AccountNotFound) => {}
            Err(e) => return Err(store_failure(e)),
        }

        let password = self
            .hasher
            .hash(&request.password)
            .await
            .map_err(internal("Failed to hash password"))?;

        let new_account = NewAccount {
            username: request.username,
            password,
            email: request.email,
            created_at: Utc::now(),
        };

        // A unique-email violation raised here means a concurrent registration won.
        let id = self
            .store
            .create(new_account.clone())
            .await
            .map_err(store_failure)?;

        tracing::info!(account_id = %id, "Account registered");

        Ok(Account::from_new(id, new_account).view())
    }
}

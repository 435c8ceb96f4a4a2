use chrono::Utc;
use keystone_core::{
    AccountId, AccountPatch, AccountStore, AccountView, PasswordHasher, SessionTokenCodec,
};

use super::AccountUseCase;
use crate::error::{AccountError, internal, store_failure};

impl<S, H, C> AccountUseCase<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    /// Replace the mutable fields of account `id` with those in `patch`.
    ///
    /// The new password is hashed before it reaches the store. The id is never
    /// taken from the patch.
    #[tracing::instrument(name = "AccountUseCase::update_account", skip(self, patch))]
    pub async fn update_account(
        &self,
        id: AccountId,
        patch: AccountPatch,
    ) -> Result<AccountView, AccountError> {
        let mut account = self.store.find_by_id(id).await.map_err(store_failure)?;

        let password = self
            .hasher
            .hash(&patch.password)
            .await
            .map_err(internal("Failed to hash password"))?;

        account.username = patch.username;
        account.password = password;
        account.email = patch.email;
        account.updated_at = Some(Utc::now());

        self.store
            .update(id, &account)
            .await
            .map_err(store_failure)?;

        Ok(account.view())
    }
}

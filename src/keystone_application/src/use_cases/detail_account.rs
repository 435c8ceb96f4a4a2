use keystone_core::{AccountId, AccountStore, AccountView, PasswordHasher, SessionTokenCodec};

use super::AccountUseCase;
use crate::error::{AccountError, store_failure};

impl<S, H, C> AccountUseCase<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    /// Fetch the account with the given id, password stripped.
    #[tracing::instrument(name = "AccountUseCase::detail_account", skip(self))]
    pub async fn detail_account(&self, id: AccountId) -> Result<AccountView, AccountError> {
        let account = self.store.find_by_id(id).await.map_err(store_failure)?;
        Ok(account.view())
    }
}

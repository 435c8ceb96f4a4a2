use keystone_core::{AccountId, AccountStore, PasswordHasher, SessionTokenCodec};

use super::AccountUseCase;
use crate::error::{AccountError, store_failure};

pub const ACCOUNT_DELETED_MESSAGE: &str = "Account deleted successfully";

impl<S, H, C> AccountUseCase<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    /// Delete account `id`.
    ///
    /// # Returns
    /// A confirmation message on success.
    #[tracing::instrument(name = "AccountUseCase::delete_account", skip(self))]
    pub async fn delete_account(&self, id: AccountId) -> Result<&'static str, AccountError> {
        self.store.delete(id).await.map_err(store_failure)?;

        tracing::info!(account_id = %id, "Account deleted");

        Ok(ACCOUNT_DELETED_MESSAGE)
    }
}

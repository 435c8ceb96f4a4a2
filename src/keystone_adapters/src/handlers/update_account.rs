use keystone_application::{AccountError, AccountUseCase};
use keystone_core::{
    AccountPatch, AccountStore, AuthResponseBuilder, AuthResponseHelpers, AuthenticatedAccount,
    PasswordHasher, ResponseStatus, SessionTokenCodec,
};

use super::{UpdateBody, account_data};

/// Replace the caller's username, password and email.
pub async fn handle_update_account<S, H, C, B>(
    use_case: &AccountUseCase<S, H, C>,
    identity: &AuthenticatedAccount,
    body: UpdateBody,
    builder: B,
) -> Result<B::Response, AccountError>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
    B: AuthResponseBuilder,
{
    let patch = AccountPatch::try_from(body)?;

    let account = use_case.update_account(identity.id, patch).await?;

    Ok(builder.success(ResponseStatus::Ok, "Account updated successfully", account_data(&account)?))
}

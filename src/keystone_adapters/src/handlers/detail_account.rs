use keystone_application::{AccountError, AccountUseCase};
use keystone_core::{
    AccountStore, AuthResponseBuilder, AuthResponseHelpers, AuthenticatedAccount, PasswordHasher,
    ResponseStatus, SessionTokenCodec,
};

use super::account_data;

/// Return the account named by the caller's session.
pub async fn handle_detail_account<S, H, C, B>(
    use_case: &AccountUseCase<S, H, C>,
    identity: &AuthenticatedAccount,
    builder: B,
) -> Result<B::Response, AccountError>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
    B: AuthResponseBuilder,
{
    let account = use_case.detail_account(identity.id).await?;

    Ok(builder.success(ResponseStatus::Ok, "OK", account_data(&account)?))
}

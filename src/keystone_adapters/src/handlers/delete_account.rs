//! Framework-agnostic account deletion handler.

use keystone_application::{AccountError, AccountUseCase};
use keystone_core::{
    AccountStore, AuthResponseBuilder, AuthResponseHelpers, AuthenticatedAccount, PasswordHasher,
    ResponseStatus, SessionTokenCodec,
};
use serde_json::Value;

/// Deletes the account named by the caller's session.
///
/// The session token itself stays valid until it expires, but every later
/// operation with it finds no account.
pub async fn handle_delete_account<S, H, C, B>(
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
    let message = use_case.delete_account(identity.id).await?;

    Ok(builder.success(ResponseStatus::Ok, message, Value::Null))
}

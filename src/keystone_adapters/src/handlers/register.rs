//! Framework-agnostic registration handler.

use keystone_application::{AccountError, AccountUseCase};
use keystone_core::{
    AccountStore, AuthResponseBuilder, AuthResponseHelpers, PasswordHasher, RegisterRequest,
    ResponseStatus, SessionTokenCodec,
};

use super::{RegisterBody, account_data};

/// Registers a new account and answers `201 Created` with the stored account.
///
/// # Returns
/// Either an HTTP success response, or the account error for the route to render
pub async fn handle_register<S, H, C, B>(
    use_case: &AccountUseCase<S, H, C>,
    body: RegisterBody,
    builder: B,
) -> Result<B::Response, AccountError>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
    B: AuthResponseBuilder,
{
    let request = RegisterRequest::try_from(body)?;

    let account = use_case.register(request).await?;

    Ok(builder.success(
        ResponseStatus::Created,
        "Account created successfully",
        account_data(&account)?,
    ))
}

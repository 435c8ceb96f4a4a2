//! Framework-agnostic login handler.

use keystone_application::{AccountError, AccountUseCase};
use keystone_core::{
    AccountStore, AuthResponseBuilder, AuthResponseHelpers, LoginRequest, PasswordHasher,
    ResponseStatus, SessionTokenCodec,
};

use super::{LoginBody, account_data};
use crate::auth_validation::SessionCookie;

/// Handle login request - framework agnostic.
///
/// On success the session token is delivered as an HTTP-only cookie described by
/// `cookie`. Failed logins never set a cookie.
///
/// ```ignore
/// // In an Axum route:
/// pub async fn login(
///     State(state): State<AccountState>,
///     body: Result<Json<LoginBody>, JsonRejection>,
/// ) -> Result<Response, AccountApiError> {
///     let Json(body) = body?;
///     handle_login(&state.use_case, body, &state.cookie, response_builder())
///         .await
///         .map_err(AccountApiError::from)
/// }
/// ```
pub async fn handle_login<S, H, C, B>(
    use_case: &AccountUseCase<S, H, C>,
    body: LoginBody,
    cookie: &SessionCookie,
    builder: B,
) -> Result<B::Response, AccountError>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
    B: AuthResponseBuilder,
{
    let request = LoginRequest::try_from(body)?;

    let outcome = use_case.login(request).await?;
    let data = account_data(&outcome.account)?;
    let cookie = cookie.create(outcome.token.into_string());

    Ok(builder
        .cookie(&cookie.to_string())
        .success(ResponseStatus::Ok, "Login successful", data))
}

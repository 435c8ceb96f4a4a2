use axum::{Extension, extract::State, response::Response};
use keystone_adapters::handlers;
use keystone_core::{AccountStore, AuthenticatedAccount, PasswordHasher, SessionTokenCodec};

use crate::{AccountApiError, AccountState, response_builder};

#[tracing::instrument(name = "Account detail", skip_all, fields(account_id = %identity.id))]
pub async fn detail_account<S, H, C>(
    State(state): State<AccountState<S, H, C>>,
    Extension(identity): Extension<AuthenticatedAccount>,
) -> Result<Response, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    Ok(handlers::handle_detail_account(&state.use_case, &identity, response_builder()).await?)
}

//! Axum-specific account deletion route.

use axum::{Extension, extract::State, response::Response};
use keystone_adapters::handlers;
use keystone_core::{AccountStore, AuthenticatedAccount, PasswordHasher, SessionTokenCodec};

use crate::{AccountApiError, AccountState, response_builder};

/// Axum account deletion route.
///
/// Expects [`crate::require_session`] to have attached the caller's identity.
#[tracing::instrument(name = "Delete account", skip_all, fields(account_id = %identity.id))]
pub async fn delete_account<S, H, C>(
    State(state): State<AccountState<S, H, C>>,
    Extension(identity): Extension<AuthenticatedAccount>,
) -> Result<Response, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    Ok(handlers::handle_delete_account(&state.use_case, &identity, response_builder()).await?)
}

use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, response::Response,
};
use keystone_adapters::handlers::{self, UpdateBody};
use keystone_core::{AccountStore, AuthenticatedAccount, PasswordHasher, SessionTokenCodec};

use crate::{AccountApiError, AccountState, response_builder};

#[tracing::instrument(name = "Update account", skip_all, fields(account_id = %identity.id))]
pub async fn update_account<S, H, C>(
    State(state): State<AccountState<S, H, C>>,
    Extension(identity): Extension<AuthenticatedAccount>,
    body: Result<Json<UpdateBody>, JsonRejection>,
) -> Result<Response, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    let Json(body) = body?;

    Ok(
        handlers::handle_update_account(&state.use_case, &identity, body, response_builder())
            .await?,
    )
}

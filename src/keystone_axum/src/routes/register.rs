use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use keystone_adapters::handlers::{self, RegisterBody};
use keystone_core::{AccountStore, PasswordHasher, SessionTokenCodec};

use crate::{AccountApiError, AccountState, response_builder};

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, H, C>(
    State(state): State<AccountState<S, H, C>>,
    body: Result<Json<RegisterBody>, JsonRejection>,
) -> Result<Response, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    let Json(body) = body?;

    Ok(handlers::handle_register(&state.use_case, body, response_builder()).await?)
}

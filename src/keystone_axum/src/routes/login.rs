//! Axum-specific login route.

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use keystone_adapters::handlers::{self, LoginBody};
use keystone_core::{AccountStore, PasswordHasher, SessionTokenCodec};

use crate::{AccountApiError, AccountState, response_builder};

/// Axum login route.
///
/// The credential check and cookie creation live in the framework-agnostic handler.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, H, C>(
    State(state): State<AccountState<S, H, C>>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Response, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    let Json(body) = body?;

    Ok(handlers::handle_login(&state.use_case, body, &state.cookie, response_builder()).await?)
}

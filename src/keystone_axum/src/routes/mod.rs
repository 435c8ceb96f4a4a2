//! Axum-specific account routes.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and convert results to Axum responses.

pub mod delete_account;
pub mod detail_account;
pub mod login;
pub mod register;
pub mod update_account;

pub use delete_account::delete_account;
pub use detail_account::detail_account;
pub use login::login;
pub use register::register;
pub use update_account::update_account;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use keystone_core::{AccountStore, PasswordHasher, SessionTokenCodec};

use crate::{AccountState, require_session};

/// All account routes under `/account`. Detail, update and delete sit behind
/// the session gate.
pub fn account_router<S, H, C>(state: AccountState<S, H, C>) -> Router
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    let gated = Router::new()
        .route("/account/detail", get(detail_account::<S, H, C>))
        .route("/account/update", patch(update_account::<S, H, C>))
        .route("/account/delete", delete(delete_account::<S, H, C>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<S, H, C>,
        ));

    Router::new()
        .route("/account/register", post(register::<S, H, C>))
        .route("/account/login", post(login::<S, H, C>))
        .merge(gated)
        .with_state(state)
}

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use keystone_core::{AccountStore, AuthValidator, PasswordHasher, SessionTokenCodec};

use crate::{AccountApiError, AccountState, AxumRequest};

/// Reject requests without a valid session, otherwise attach the
/// [`keystone_core::AuthenticatedAccount`] as a request extension.
pub async fn require_session<S, H, C>(
    State(state): State<AccountState<S, H, C>>,
    request: Request,
    next: Next,
) -> Result<Response, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    let request = AxumRequest::from(request);
    let identity = state.gate.validate(&request)?;

    let mut request = Request::from(request);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

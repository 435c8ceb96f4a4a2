use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use keystone_adapters::{SessionError, handlers::handle_failure};
use keystone_application::AccountError;
use keystone_core::{AuthResponseHelpers, ResponseStatus};
use thiserror::Error;

use crate::adapters::response_builder;

/// Every way an account route can fail, rendered as the response envelope.
#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Unprocessable request body: {0}")]
    UnprocessableBody(String),
}

impl From<JsonRejection> for AccountApiError {
    fn from(rejection: JsonRejection) -> Self {
        AccountApiError::UnprocessableBody(rejection.body_text())
    }
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        match self {
            AccountApiError::Account(error) => handle_failure(response_builder(), &error),
            AccountApiError::Session(error) => {
                tracing::debug!(reason = %error, "Session rejected");
                response_builder().failure(ResponseStatus::Unauthorized, "Unauthorized")
            }
            AccountApiError::UnprocessableBody(message) => {
                response_builder().failure(ResponseStatus::UnprocessableEntity, &message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AccountApiError::Account(AccountError::Conflict), 409),
            (AccountApiError::Account(AccountError::Internal), 500),
            (AccountApiError::Session(SessionError::Expired), 401),
            (AccountApiError::Session(SessionError::MissingToken), 401),
            (AccountApiError::UnprocessableBody("eof".into()), 422),
        ];

        for (error, code) in cases {
            assert_eq!(error.into_response().status(), code);
        }
    }
}

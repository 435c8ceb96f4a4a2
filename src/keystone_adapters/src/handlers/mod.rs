//! Framework-agnostic account handlers.
//!
//! These handlers turn decoded request bodies into use case calls and shape the
//! outcome into the response envelope. Framework-specific routes extract data
//! from requests, call these handlers, and turn the error side into their own
//! error responses with [`handle_failure`].

pub mod delete_account;
pub mod detail_account;
pub mod login;
pub mod payloads;
pub mod register;
pub mod update_account;

pub use delete_account::handle_delete_account;
pub use detail_account::handle_detail_account;
pub use login::handle_login;
pub use payloads::{LoginBody, RegisterBody, UpdateBody};
pub use register::handle_register;
pub use update_account::handle_update_account;

use keystone_application::AccountError;
use keystone_core::{AccountView, AuthResponseBuilder, AuthResponseHelpers, ResponseStatus};
use serde_json::Value;

/// Status label for a failed account operation.
pub fn error_status(error: &AccountError) -> ResponseStatus {
    match error {
        AccountError::NotFound => ResponseStatus::NotFound,
        AccountError::Conflict => ResponseStatus::Conflict,
        AccountError::Unauthorized => ResponseStatus::Unauthorized,
        AccountError::BadRequest(_) => ResponseStatus::BadRequest,
        AccountError::Internal => ResponseStatus::InternalServerError,
    }
}

/// Render a failed operation as an envelope with `null` data.
pub fn handle_failure<B: AuthResponseBuilder>(builder: B, error: &AccountError) -> B::Response {
    builder.failure(error_status(error), &error.to_string())
}

fn account_data(view: &AccountView) -> Result<Value, AccountError> {
    serde_json::to_value(view).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize account");
        AccountError::Internal
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::RecordingBuilder;

    #[test]
    fn test_failure_statuses() {
        let cases = [
            (AccountError::NotFound, 404, "Not Found"),
            (AccountError::Conflict, 409, "Conflict"),
            (AccountError::Unauthorized, 401, "Unauthorized"),
            (AccountError::BadRequest("invalid email".into()), 400, "Bad Request"),
            (AccountError::Internal, 500, "Internal Server Error"),
        ];

        for (error, code, label) in cases {
            let response = handle_failure(RecordingBuilder::default(), &error);
            assert_eq!(response.status, code);
            assert_eq!(response.body["status"], label);
            assert_eq!(response.body["message"], error.to_string());
            assert!(response.body["data"].is_null());
        }
    }
}

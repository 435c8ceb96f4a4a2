use keystone_core::{AccountStoreError, ValidationError};
use thiserror::Error;

/// Outcome taxonomy of every account operation.
///
/// Underlying store and crypto failures are logged where they happen and surface
/// only as [`AccountError::Internal`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account not found")]
    NotFound,
    #[error("Email already registered")]
    Conflict,
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal server error")]
    Internal,
}

impl From<ValidationError> for AccountError {
    fn from(error: ValidationError) -> Self {
        AccountError::BadRequest(error.to_string())
    }
}

/// Classify a store failure, logging the ones that carry driver detail.
pub(crate) fn store_failure(error: AccountStoreError) -> AccountError {
    match error {
        AccountStoreError::AccountNotFound => AccountError::NotFound,
        AccountStoreError::EmailAlreadyExists => AccountError::Conflict,
        AccountStoreError::UnexpectedError(detail) => {
            tracing::error!(error = %detail, "Account store failure");
            AccountError::Internal
        }
    }
}

/// Log `error` under `context` and collapse it into [`AccountError::Internal`].
pub(crate) fn internal<E: std::fmt::Display>(context: &'static str) -> impl FnOnce(E) -> AccountError {
    move |error| {
        tracing::error!(error = %error, "{context}");
        AccountError::Internal
    }
}

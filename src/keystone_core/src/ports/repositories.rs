use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountId, NewAccount},
    email::Email,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Email already registered")]
    EmailAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::EmailAlreadyExists, Self::EmailAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence capability for account records.
///
/// `update` and `delete` report [`AccountStoreError::AccountNotFound`] when no row
/// was affected.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError>;
    async fn update(&self, id: AccountId, account: &Account) -> Result<(), AccountStoreError>;
    async fn delete(&self, id: AccountId) -> Result<(), AccountStoreError>;
}

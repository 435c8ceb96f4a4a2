//! In-memory collaborators shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, Utc};
use keystone_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, HashingError, NewAccount,
    Password, PasswordHash, PasswordHasher, RegisterRequest, SessionClaims, SessionToken,
    SessionTokenCodec, TokenError, Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use crate::AccountUseCase;

#[derive(Clone, Default)]
pub struct MockAccountStore {
    pub accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    next_id: Arc<AtomicI64>,
    broken: bool,
}

impl MockAccountStore {
    /// A store whose every call fails like a dropped database connection.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), AccountStoreError> {
        if self.broken {
            return Err(AccountStoreError::UnexpectedError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError> {
        self.check()?;
        let id = AccountId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.accounts
            .write()
            .await
            .insert(id, Account::from_new(id, account));
        Ok(id)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        self.check()?;
        self.accounts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        self.check()?;
        self.accounts
            .read()
            .await
            .values()
            .find(|account| &account.email == email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update(&self, id: AccountId, account: &Account) -> Result<(), AccountStoreError> {
        self.check()?;
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|other| other.id != id && other.email == account.email)
        {
            return Err(AccountStoreError::EmailAlreadyExists);
        }
        let stored = accounts
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        *stored = account.clone();
        Ok(())
    }

    async fn delete(&self, id: AccountId) -> Result<(), AccountStoreError> {
        self.check()?;
        self.accounts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(AccountStoreError::AccountNotFound)
    }
}

/// Reversible stand-in for a real hasher.
#[derive(Clone, Default)]
pub struct FakeHasher {
    pub fail: bool,
}

#[async_trait::async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        if self.fail {
            return Err(HashingError("out of memory".to_string()));
        }
        Ok(PasswordHash::new(format!(
            "fake${}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        hash.as_str()
            .strip_prefix("fake$")
            .is_some_and(|plain| plain == password.as_ref().expose_secret())
    }
}

/// Unsigned `id|email|iat|exp` codec.
#[derive(Clone, Default)]
pub struct FakeCodec {
    pub fail: bool,
}

impl SessionTokenCodec for FakeCodec {
    fn issue(&self, claims: &SessionClaims) -> Result<SessionToken, TokenError> {
        if self.fail {
            return Err(TokenError::Signing("key rejected".to_string()));
        }
        Ok(SessionToken::from(format!(
            "{}|{}|{}|{}",
            claims.account_id, claims.email, claims.issued_at, claims.expires_at
        )))
    }

    fn parse(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let parts: Vec<&str> = token.split('|').collect();
        let [id, email, iat, exp] = parts.as_slice() else {
            return Err(TokenError::Decode("expected four segments".to_string()));
        };
        let number = |s: &str| s.parse::<i64>().map_err(|e| TokenError::Decode(e.to_string()));
        Ok(SessionClaims {
            account_id: AccountId::new(number(*id)?),
            email: email.to_string(),
            issued_at: number(*iat)?,
            expires_at: number(*exp)?,
        })
    }
}

pub type TestUseCase = AccountUseCase<MockAccountStore, FakeHasher, FakeCodec>;

pub fn use_case(store: MockAccountStore) -> TestUseCase {
    AccountUseCase::new(store, FakeHasher::default(), FakeCodec::default())
}

pub fn email(raw: &str) -> Email {
    Email::try_from(raw.to_string()).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::new(raw.to_string())).unwrap()
}

pub fn username(raw: &str) -> Username {
    Username::try_from(raw.to_string()).unwrap()
}

pub fn register_request(name: &str, pass: &str, mail: &str) -> RegisterRequest {
    RegisterRequest {
        username: username(name),
        password: password(pass),
        email: email(mail),
    }
}

/// Insert an account directly, bypassing the use case.
pub async fn seed(store: &MockAccountStore, name: &str, pass: &str, mail: &str) -> AccountId {
    store
        .create(NewAccount {
            username: username(name),
            password: PasswordHash::new(format!("fake${pass}")),
            email: email(mail),
            created_at: Utc::now() - Duration::days(1),
        })
        .await
        .unwrap()
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use keystone_core::{Account, AccountId, AccountStore, AccountStoreError, Email, NewAccount};

#[derive(Default)]
struct Accounts {
    by_id: HashMap<AccountId, Account>,
    last_id: i64,
}

/// Process-local store used when no database is configured.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(accounts: &Accounts, email: &Email, except: Option<AccountId>) -> bool {
    accounts
        .by_id
        .values()
        .any(|account| &account.email == email && Some(account.id) != except)
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if email_taken(&accounts, &account.email, None) {
            return Err(AccountStoreError::EmailAlreadyExists);
        }
        accounts.last_id += 1;
        let id = AccountId::new(accounts.last_id);
        accounts.by_id.insert(id, Account::from_new(id, account));
        Ok(id)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .by_id
            .get(&id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .by_id
            .values()
            .find(|account| &account.email == email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update(&self, id: AccountId, account: &Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if !accounts.by_id.contains_key(&id) {
            return Err(AccountStoreError::AccountNotFound);
        }
        if email_taken(&accounts, &account.email, Some(id)) {
            return Err(AccountStoreError::EmailAlreadyExists);
        }
        let mut stored = account.clone();
        stored.id = id;
        accounts.by_id.insert(id, stored);
        Ok(())
    }

    async fn delete(&self, id: AccountId) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .by_id
            .remove(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fake::Fake;
    use fake::faker::internet::en::{FreeEmail, Username as FakeUsername};
    use keystone_core::{PasswordHash, Username};

    fn new_account(email: &str) -> NewAccount {
        let name: String = FakeUsername().fake();
        NewAccount {
            username: Username::try_from(name).unwrap(),
            password: PasswordHash::new("$argon2id$v=19$stub".to_string()),
            email: Email::try_from(email.to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn random_email() -> String {
        FreeEmail().fake()
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = HashMapAccountStore::new();

        let first = store.create(new_account("a@x.com")).await.unwrap();
        let second = store.create(new_account("b@x.com")).await.unwrap();

        assert_eq!(first, AccountId::new(1));
        assert_eq!(second, AccountId::new(2));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let store = HashMapAccountStore::new();
        let email = random_email();

        store.create(new_account(&email)).await.unwrap();
        let result = store.create(new_account(&email)).await;

        assert_eq!(result, Err(AccountStoreError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_find_by_email_and_id() {
        let store = HashMapAccountStore::new();
        let email = random_email();
        let id = store.create(new_account(&email)).await.unwrap();

        let by_id = store.find_by_id(id).await.unwrap();
        let by_email = store
            .find_by_email(&Email::try_from(email.clone()).unwrap())
            .await
            .unwrap();

        assert_eq!(by_id.id, id);
        assert_eq!(by_email.id, id);
        assert_eq!(by_email.email.as_str(), email);
    }

    #[tokio::test]
    async fn test_missing_account() {
        let store = HashMapAccountStore::new();

        assert_eq!(
            store.find_by_id(AccountId::new(42)).await.unwrap_err(),
            AccountStoreError::AccountNotFound
        );
        assert_eq!(
            store.delete(AccountId::new(42)).await,
            Err(AccountStoreError::AccountNotFound)
        );
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = HashMapAccountStore::new();
        let id = store.create(new_account("a@x.com")).await.unwrap();

        let mut account = store.find_by_id(id).await.unwrap();
        account.email = Email::try_from("new@x.com".to_string()).unwrap();
        account.updated_at = Some(Utc::now());
        store.update(id, &account).await.unwrap();

        let stored = store.find_by_id(id).await.unwrap();
        assert_eq!(stored.email.as_str(), "new@x.com");
        assert!(stored.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_into_taken_email_is_rejected() {
        let store = HashMapAccountStore::new();
        store.create(new_account("a@x.com")).await.unwrap();
        let id = store.create(new_account("b@x.com")).await.unwrap();

        let mut account = store.find_by_id(id).await.unwrap();
        account.email = Email::try_from("a@x.com".to_string()).unwrap();

        assert_eq!(
            store.update(id, &account).await,
            Err(AccountStoreError::EmailAlreadyExists)
        );
    }

    #[tokio::test]
    async fn test_delete_removes_account() {
        let store = HashMapAccountStore::new();
        let id = store.create(new_account("a@x.com")).await.unwrap();

        store.delete(id).await.unwrap();

        assert_eq!(
            store.find_by_id(id).await.unwrap_err(),
            AccountStoreError::AccountNotFound
        );
    }
}

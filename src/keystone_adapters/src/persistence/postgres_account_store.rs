use chrono::{DateTime, Utc};
use keystone_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, NewAccount, PasswordHash, Username,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::DatabaseSettings;

pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }
}

/// Open a connection pool against `settings.url`.
pub async fn connect(url: &Secret<String>, settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(url.expose_secret())
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let corrupt = |e: keystone_core::ValidationError| {
            AccountStoreError::UnexpectedError(format!("stored account {} is invalid: {e}", row.id))
        };
        Ok(Account {
            id: AccountId::new(row.id),
            username: Username::try_from(row.username.clone()).map_err(corrupt)?,
            password: PasswordHash::new(row.password.clone()),
            email: Email::try_from(row.email.clone()).map_err(corrupt)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn write_failure(e: sqlx::Error) -> AccountStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AccountStoreError::EmailAlreadyExists;
        }
    }
    AccountStoreError::UnexpectedError(e.to_string())
}

fn unexpected(e: sqlx::Error) -> AccountStoreError {
    AccountStoreError::UnexpectedError(e.to_string())
}

const SELECT_ACCOUNT: &str = r#"
    SELECT id, username, password, email, created_at, updated_at
    FROM accounts
"#;

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO accounts (username, password, email, created_at)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.password.as_str())
        .bind(account.email.as_str())
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(write_failure)?;

        Ok(AccountId::new(id))
    }

    #[tracing::instrument(name = "Retrieving account by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };

        Account::try_from(row)
    }

    #[tracing::instrument(name = "Retrieving account by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };

        Account::try_from(row)
    }

    #[tracing::instrument(name = "Updating account in PostgreSQL", skip_all)]
    async fn update(&self, id: AccountId, account: &Account) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET username = $1, password = $2, email = $3, updated_at = $4
                WHERE id = $5
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.password.as_str())
        .bind(account.email.as_str())
        .bind(account.updated_at)
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(write_failure)?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Delete account from PostgreSQL", skip_all)]
    async fn delete(&self, id: AccountId) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM accounts
                WHERE id = $1
            "#,
        )
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }
}

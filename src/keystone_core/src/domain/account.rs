use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, ser::SerializeStruct};

use super::{email::Email, password::Password, password_hash::PasswordHash, username::Username};

/// Store-assigned numeric identifier. Zero never names a stored account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub const ANONYMOUS: AccountId = AccountId(0);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn is_anonymous(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored account record. The password is always a hash.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub password: PasswordHash,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn from_new(id: AccountId, new: NewAccount) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
            email: new.email,
            created_at: new.created_at,
            updated_at: None,
        }
    }

    /// Outbound representation with the password stripped.
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id,
            username: self.username.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// An account not yet persisted; the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub password: PasswordHash,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

/// Account as returned to callers. Carries no password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

// The password key is kept on the wire, always empty.
impl Serialize for AccountView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Account", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field("password", "")?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("created_at", &self.created_at)?;
        state.serialize_field("updated_at", &self.updated_at)?;
        state.end()
    }
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: Username,
    pub password: Password,
    pub email: Email,
}

/// Validated login input.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: Email,
    pub password: Password,
}

/// Validated replacement values for the mutable account fields.
#[derive(Debug, Clone)]
pub struct AccountPatch {
    pub username: Username,
    pub password: Password,
    pub email: Email,
}

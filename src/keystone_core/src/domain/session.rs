use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::account::AccountId;

/// Identity and lifetime claims signed into a session token.
///
/// Timestamps are Unix seconds. An `account_id` of zero means "not authenticated".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "id")]
    pub account_id: AccountId,
    pub email: String,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Session expiry is out of range")]
pub struct ExpiryOutOfRange;

impl SessionClaims {
    pub fn new(
        account_id: AccountId,
        email: String,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, ExpiryOutOfRange> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(ExpiryOutOfRange)?;

        Ok(Self {
            account_id,
            email,
            issued_at: issued_at.timestamp(),
            expires_at: expires_at.timestamp(),
        })
    }

    /// Claims that identify nobody.
    pub fn anonymous() -> Self {
        Self {
            account_id: AccountId::ANONYMOUS,
            email: String::new(),
            issued_at: 0,
            expires_at: 0,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.account_id.is_anonymous()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now.timestamp()
    }
}

/// Signed, opaque serialization of [`SessionClaims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        SessionToken(s)
    }
}

/// The account a validated session identifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub email: String,
}

//! Account use cases.
//!
//! Each operation lives in its own module as an `impl` block on [`AccountUseCase`].

mod delete_account;
mod detail_account;
mod login;
mod register;
mod update_account;

use chrono::Duration;
use keystone_core::{AccountStore, PasswordHasher, SessionTokenCodec};

pub use delete_account::ACCOUNT_DELETED_MESSAGE;
pub use login::LoginOutcome;

/// Default lifetime of an issued session: 24 hours.
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 86_400;

/// Orchestrates registration, login, and the authorized account mutations.
///
/// Holds no mutable state of its own: every call works against the store, so one
/// instance is shared across concurrent requests.
#[derive(Clone)]
pub struct AccountUseCase<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    store: S,
    hasher: H,
    codec: C,
    session_ttl: Duration,
}

impl<S, H, C> AccountUseCase<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    pub fn new(store: S, hasher: H, codec: C) -> Self {
        Self {
            store,
            hasher,
            codec,
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECONDS),
        }
    }

    pub fn with_session_ttl(mut self, session_ttl: Duration) -> Self {
        self.session_ttl = session_ttl;
        self
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}

use std::sync::Arc;

use keystone_adapters::{SessionCookie, SessionGate};
use keystone_application::AccountUseCase;
use keystone_core::{AccountStore, PasswordHasher, SessionTokenCodec};

/// Shared state of the account routes.
pub struct AccountState<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    pub use_case: Arc<AccountUseCase<S, H, C>>,
    pub gate: SessionGate<C>,
    pub cookie: SessionCookie,
}

impl<S, H, C> AccountState<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec + Clone,
{
    /// The gate reads the same cookie the login route sets.
    pub fn new(use_case: AccountUseCase<S, H, C>, cookie: SessionCookie) -> Self {
        let gate = SessionGate::new(use_case.codec().clone(), cookie.name.clone());
        Self {
            use_case: Arc::new(use_case),
            gate,
            cookie,
        }
    }
}

impl<S, H, C> Clone for AccountState<S, H, C>
where
    S: AccountStore,
    H: PasswordHasher,
    C: SessionTokenCodec + Clone,
{
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            gate: self.gate.clone(),
            cookie: self.cookie.clone(),
        }
    }
}

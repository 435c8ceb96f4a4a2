pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    account::{
        Account, AccountId, AccountPatch, AccountView, LoginRequest, NewAccount, RegisterRequest,
    },
    email::Email,
    password::Password,
    password_hash::PasswordHash,
    session::{AuthenticatedAccount, ExpiryOutOfRange, SessionClaims, SessionToken},
    username::Username,
    validation_error::ValidationError,
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{HashingError, PasswordHasher, SessionTokenCodec, TokenError},
};

pub use strategies::auth_validator::AuthValidator;

pub use http_abstraction::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers, ResponseStatus};

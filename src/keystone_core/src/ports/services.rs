use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::Password,
    password_hash::PasswordHash,
    session::{SessionClaims, SessionToken},
};

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct HashingError(pub String);

/// Port for one-way credential hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError>;

    /// `false` on mismatch and on any hash that cannot be decoded.
    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign session token: {0}")]
    Signing(String),
    #[error("Malformed session token: {0}")]
    Decode(String),
    #[error("Session token signature is invalid")]
    SignatureInvalid,
}

/// Port for issuing and reading signed session tokens.
pub trait SessionTokenCodec: Send + Sync {
    fn issue(&self, claims: &SessionClaims) -> Result<SessionToken, TokenError>;

    /// Verifies the signature and returns the claims. Expiry is not checked here.
    fn parse(&self, token: &str) -> Result<SessionClaims, TokenError>;

    /// Like [`parse`](Self::parse) but folds every failure into anonymous claims.
    fn parse_or_anonymous(&self, token: &str) -> SessionClaims {
        self.parse(token).unwrap_or_else(|_| SessionClaims::anonymous())
    }
}

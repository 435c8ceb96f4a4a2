//! Infrastructure for the account service: configuration, password hashing,
//! session tokens, persistence, and the framework-agnostic request handlers.

pub mod auth_validation;
pub mod config;
pub mod handlers;
pub mod hashing;
pub mod persistence;

pub use auth_validation::{JwtSessionCodec, SessionCookie, SessionError, SessionGate};
pub use config::{Settings, SettingsError};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapAccountStore, PostgresAccountStore};

use thiserror::Error;

/// Structural problems found while turning raw request fields into domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Username must not be empty")]
    EmptyUsername,
}

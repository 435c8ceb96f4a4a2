pub mod error;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::AccountError;
pub use use_cases::{
    ACCOUNT_DELETED_MESSAGE, AccountUseCase, DEFAULT_SESSION_TTL_SECONDS, LoginOutcome,
};

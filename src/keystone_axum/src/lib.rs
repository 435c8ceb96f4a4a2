//! Axum integration for the account service.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  keystone_core: HTTP trait definitions   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  keystone_axum: Axum implementations     │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponseBuilder                   │
//! │  - session middleware and routes         │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use keystone_axum::{AccountState, routes::account_router};
//!
//! let app = account_router(AccountState::new(use_case, cookie));
//! ```

pub mod adapters;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use error::AccountApiError;
pub use middleware::require_session;
pub use routes::account_router;
pub use state::AccountState;

//! # Keystone - Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account service components.
//! Use this crate to get access to registration, login and the session-gated account
//! operations in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! keystone = { path = "../keystone" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Email`, `Password`, `SessionClaims`, etc.
//! - **Ports**: `AccountStore`, `PasswordHasher`, `SessionTokenCodec`
//! - **Use cases**: `AccountUseCase`
//! - **Adapters**: `PostgresAccountStore`, `Argon2PasswordHasher`, `JwtSessionCodec`, etc.
//! - **Service**: `AccountService` - The main entry point for the account service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use keystone_core::*;
}

pub use keystone_core::{
    Account, AccountId, AccountPatch, AccountView, AuthenticatedAccount, Email, LoginRequest,
    NewAccount, Password, PasswordHash, RegisterRequest, SessionClaims, SessionToken, Username,
    ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

pub use keystone_core::{
    AccountStore, AccountStoreError, HashingError, PasswordHasher, SessionTokenCodec, TokenError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use keystone_application::*;
}

pub use keystone_application::{AccountError, AccountUseCase, LoginOutcome};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic request handlers
    pub mod handlers {
        pub use keystone_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use keystone_adapters::persistence::*;
    }

    /// Session tokens and the session gate
    pub mod auth {
        pub use keystone_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use keystone_adapters::config::*;
    }
}

pub use keystone_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, JwtSessionCodec, PostgresAccountStore,
    SessionCookie, SessionGate, Settings,
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

pub use keystone_axum::{AccountState, account_router};
pub use keystone_service::{AccountService, configure_postgresql};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;

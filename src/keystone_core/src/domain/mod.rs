pub mod account;
pub mod email;
pub mod password;
pub mod password_hash;
pub mod session;
pub mod username;
pub mod validation_error;

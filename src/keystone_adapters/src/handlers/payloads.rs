//! Request bodies as they arrive on the wire, before domain validation.

use keystone_application::AccountError;
use keystone_core::{
    AccountPatch, Email, LoginRequest, Password, RegisterRequest, Username,
};
use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub username: String,
    pub password: Secret<String>,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub username: String,
    pub password: Secret<String>,
    pub email: String,
}

impl TryFrom<RegisterBody> for RegisterRequest {
    type Error = AccountError;

    fn try_from(body: RegisterBody) -> Result<Self, Self::Error> {
        Ok(RegisterRequest {
            username: Username::try_from(body.username)?,
            password: Password::try_from(body.password)?,
            email: Email::try_from(body.email)?,
        })
    }
}

impl TryFrom<LoginBody> for LoginRequest {
    type Error = AccountError;

    fn try_from(body: LoginBody) -> Result<Self, Self::Error> {
        Ok(LoginRequest {
            email: Email::try_from(body.email)?,
            password: Password::try_from(body.password)?,
        })
    }
}

impl TryFrom<UpdateBody> for AccountPatch {
    type Error = AccountError;

    fn try_from(body: UpdateBody) -> Result<Self, Self::Error> {
        Ok(AccountPatch {
            username: Username::try_from(body.username)?,
            password: Password::try_from(body.password)?,
            email: Email::try_from(body.email)?,
        })
    }
}

use chrono::{DateTime, Utc};
use keystone_core::{AuthRequest, AuthValidator, AuthenticatedAccount, SessionTokenCodec};
use thiserror::Error;

/// Reasons a request is refused by the session gate. All of them mean "unauthorized".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Missing session token")]
    MissingToken,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Session expired")]
    Expired,
}

/// Gate in front of every protected operation.
///
/// Reads the session token from its cookie and resolves it to the account it
/// identifies. Undecodable tokens and tokens with a bad signature are treated
/// exactly like a token naming account 0.
#[derive(Clone)]
pub struct SessionGate<C> {
    codec: C,
    cookie_name: String,
}

impl<C> SessionGate<C>
where
    C: SessionTokenCodec,
{
    pub fn new(codec: C, cookie_name: impl Into<String>) -> Self {
        Self {
            codec,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn validate_at<R: AuthRequest>(
        &self,
        request: &R,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedAccount, SessionError> {
        let token = request
            .cookie(&self.cookie_name)
            .ok_or(SessionError::MissingToken)?;

        let claims = self.codec.parse_or_anonymous(token);

        if claims.is_anonymous() {
            return Err(SessionError::Unauthenticated);
        }

        if claims.is_expired_at(now) {
            return Err(SessionError::Expired);
        }

        Ok(AuthenticatedAccount {
            id: claims.account_id,
            email: claims.email,
        })
    }
}

impl<C> AuthValidator for SessionGate<C>
where
    C: SessionTokenCodec + Clone + 'static,
{
    type Identity = AuthenticatedAccount;
    type Error = SessionError;

    fn validate<R: AuthRequest>(&self, request: &R) -> Result<Self::Identity, Self::Error> {
        self.validate_at(request, Utc::now())
    }
}

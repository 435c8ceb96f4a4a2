use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use keystone_core::{SessionClaims, SessionToken, SessionTokenCodec, TokenError};
use secrecy::{ExposeSecret, Secret};

/// HS256 session token codec.
///
/// The signing key is handed in once at construction and never changes for the
/// life of the codec.
#[derive(Clone)]
pub struct JwtSessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionCodec {
    pub fn new(secret: &Secret<String>) -> Self {
        let secret = secret.expose_secret().as_bytes();

        // Expiry is enforced by the session gate against the caller's clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl SessionTokenCodec for JwtSessionCodec {
    fn issue(&self, claims: &SessionClaims) -> Result<SessionToken, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map(SessionToken::from)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn parse(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Decode(e.to_string()),
            })
    }
}

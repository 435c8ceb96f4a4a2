use argon2::{
    Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version,
    password_hash::{SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use keystone_core::{HashingError, Password, PasswordHash, PasswordHasher};

use crate::config::HashingSettings;

/// Argon2id hasher with a deployment-configured work factor.
///
/// Hashing and verification are CPU-bound and run on the blocking pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(settings: &HashingSettings) -> Result<Self, HashingError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| HashingError(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn hash_blocking(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| PasswordHash::new(hash.to_string()))
            .map_err(|e| HashingError(e.to_string()))
    }

    // The work factor is read from the encoded hash, so hashes made under an
    // older configuration still verify. Argon2 compares digests in constant time.
    fn verify_blocking(&self, password: &Password, hash: &PasswordHash) -> bool {
        let Ok(parsed) = argon2::PasswordHash::new(hash.as_str()) else {
            return false;
        };
        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let hasher = self.clone();
        let password = password.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || current_span.in_scope(|| hasher.hash_blocking(&password)))
            .await
            .map_err(|e| HashingError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        let hasher = self.clone();
        let password = password.clone();
        let hash = hash.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| hasher.verify_blocking(&password, &hash))
        })
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            false
        })
    }
}

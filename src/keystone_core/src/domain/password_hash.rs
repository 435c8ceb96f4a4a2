use secrecy::{ExposeSecret, Secret};

/// Encoded one-way hash of a password, salt included (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(encoded: String) -> Self {
        Self(Secret::new(encoded))
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

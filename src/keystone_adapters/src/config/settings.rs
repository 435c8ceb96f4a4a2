//! Layered service configuration.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `config/base.json` (optional)
//! 3. `config/{APP_ENVIRONMENT}.json` (optional, environment defaults to `local`)
//! 4. `KEYSTONE__SECTION__KEY` environment variables
//! 5. the well-known `JWT_SECRET` and `DATABASE_URL` variables
//!
//! A `.env` file is read into the process environment before any of this.

use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{
    CONFIG_DIR, DEFAULT_ENVIRONMENT, MAX_SESSION_TTL_SECONDS, MIN_SECRET_LENGTH,
    SESSION_COOKIE_NAME,
    env::{APP_ENVIRONMENT_ENV_VAR, DATABASE_URL_ENV_VAR, ENV_PREFIX, JWT_SECRET_ENV_VAR},
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
    pub hashing: HashingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout_in_millis: u64,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// No URL means accounts are kept in memory.
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub secret: Secret<String>,
    pub cookie_name: String,
    pub ttl_in_seconds: i64,
    pub secure_cookie: bool,
}

/// Argon2id work factor.
#[derive(Debug, Clone, Deserialize)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Settings {
    /// Load settings from files and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/base")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("session.secret", std::env::var(JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("database.url", std::env::var(DATABASE_URL_ENV_VAR).ok())?;

        Self::from_config(builder.build()?)
    }

    /// Built-in defaults. Everything but the session secret has one.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let hashing = HashingSettings::default();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.request_timeout_in_millis", 10_000_i64)?
            .set_default("server.allowed_origins", Vec::<String>::new())?
            .set_default("database.max_connections", 5_i64)?
            .set_default("session.cookie_name", SESSION_COOKIE_NAME)?
            .set_default("session.ttl_in_seconds", 86_400_i64)?
            .set_default("session.secure_cookie", false)?
            .set_default("hashing.memory_kib", i64::from(hashing.memory_kib))?
            .set_default("hashing.iterations", i64::from(hashing.iterations))?
            .set_default("hashing.parallelism", i64::from(hashing.parallelism))
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.session.secret.expose_secret().len() < MIN_SECRET_LENGTH {
            return Err(SettingsError::Invalid(format!(
                "session secret must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }

        if !(1..=MAX_SESSION_TTL_SECONDS).contains(&self.session.ttl_in_seconds) {
            return Err(SettingsError::Invalid(format!(
                "session ttl must be between 1 and {MAX_SESSION_TTL_SECONDS} seconds"
            )));
        }

        if self.session.cookie_name.is_empty() {
            return Err(SettingsError::Invalid(
                "session cookie name must not be empty".to_string(),
            ));
        }

        argon2::Params::new(
            self.hashing.memory_kib,
            self.hashing.iterations,
            self.hashing.parallelism,
            None,
        )
        .map_err(|e| SettingsError::Invalid(format!("hashing work factor: {e}")))?;

        Ok(())
    }
}

pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const ENV_PREFIX: &str = "KEYSTONE";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const SESSION_COOKIE_NAME: &str = "token";
pub const MIN_SECRET_LENGTH: usize = 32;
/// One year.
pub const MAX_SESSION_TTL_SECONDS: i64 = 31_536_000;

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hs256";
}

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, request},
    routing::get,
};
use keystone_adapters::{
    Argon2PasswordHasher, JwtSessionCodec, SessionCookie, Settings, config::AllowedOrigins,
};
use keystone_application::AccountUseCase;
use keystone_core::{AccountStore, HashingError, PasswordHasher, SessionTokenCodec};
use keystone_axum::{AccountState, account_router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

#[derive(Debug, Error)]
pub enum ServiceSetupError {
    #[error(transparent)]
    Hashing(#[from] HashingError),
    #[error("Session ttl of {0} seconds is out of range")]
    SessionTtl(i64),
}

/// The account service: account routes plus a health probe.
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create the service around an already assembled route state.
    pub fn new<S, H, C>(state: AccountState<S, H, C>) -> Self
    where
        S: AccountStore + 'static,
        H: PasswordHasher + 'static,
        C: SessionTokenCodec + Clone + 'static,
    {
        let router = account_router(state).route("/health", get(health));

        Self { router }
    }

    /// Assemble hasher, codec and use case from `settings` around `store`.
    pub fn from_settings<S>(settings: &Settings, store: S) -> Result<Self, ServiceSetupError>
    where
        S: AccountStore + 'static,
    {
        let ttl_in_seconds = settings.session.ttl_in_seconds;
        let session_ttl = chrono::Duration::try_seconds(ttl_in_seconds)
            .ok_or(ServiceSetupError::SessionTtl(ttl_in_seconds))?;

        let hasher = Argon2PasswordHasher::new(&settings.hashing)?;
        let codec = JwtSessionCodec::new(&settings.session.secret);
        let use_case = AccountUseCase::new(store, hasher, codec).with_session_ttl(session_ttl);

        Ok(Self::new(AccountState::new(
            use_case,
            SessionCookie::from(&settings.session),
        )))
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.router = self
            .router
            .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout));
        self
    }

    /// Convert the service into a router that can be mounted on another router.
    ///
    /// CORS is only enabled when `allowed_origins` is non-empty.
    pub fn into_router(mut self, allowed_origins: AllowedOrigins, timeout: Duration) -> Router {
        if !allowed_origins.is_empty() {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_timeout(timeout).with_trace_layer().router
    }

    /// Run the service as a standalone server on `listener`.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        settings: &Settings,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(
            settings.server.allowed_origins.clone(),
            Duration::from_millis(settings.server.request_timeout_in_millis),
        );

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}

async fn health() -> &'static str {
    "ok"
}

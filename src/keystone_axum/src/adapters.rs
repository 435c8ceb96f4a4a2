//! Axum framework adapters for the framework-neutral HTTP traits.
//!
//! This module implements `AuthRequest` and `AuthResponseBuilder` for Axum's types
//! using newtype wrappers to avoid the orphan rule.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  keystone_core::AuthRequest (trait)        │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(axum::Request)                │
//! │  impl AuthRequest for AxumRequest { }      │
//! └────────────────────────────────────────────┘
//! ```

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Response, StatusCode};
use keystone_core::{AuthRequest, AuthResponseBuilder};

/// Newtype wrapper around Axum's Request type.
#[repr(transparent)]
pub struct AxumRequest(pub Request);

impl From<Request> for AxumRequest {
    fn from(req: Request) -> Self {
        AxumRequest(req)
    }
}

impl From<AxumRequest> for Request {
    fn from(wrapper: AxumRequest) -> Self {
        wrapper.0
    }
}

impl AuthRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers().get(name)?.to_str().ok()
    }

    fn method(&self) -> &str {
        self.0.method().as_str()
    }

    fn path(&self) -> &str {
        self.0.uri().path()
    }
}

/// Builds `Response<Body>` through the framework-neutral builder trait.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}

//! Framework-neutral HTTP traits for the account service.
//!
//! Web frameworks implement these on newtype wrappers of their own request and
//! response-builder types. Session validation and response shaping are written
//! once against the traits and work with any framework.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  keystone_core: AuthRequest,             │
//! │  AuthResponseBuilder                     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  keystone_axum: AxumRequest,             │
//! │  AxumResponseBuilder                     │
//! └──────────────────────────────────────────┘
//! ```

use serde_json::Value;

/// Read access to the parts of an inbound request the auth flow needs.
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Header lookup should be case-insensitive.
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a cookie value by name from the `Cookie` header.
    fn cookie(&self, name: &str) -> Option<&str> {
        parse_cookie(self.header("cookie")?, name)
    }

    fn method(&self) -> &str;

    fn path(&self) -> &str;
}

/// Find `name` in a `Cookie` header value (`a=1; b=2`).
pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Builder for outbound responses.
///
/// ```ignore
/// builder
///     .status(200)
///     .cookie("token=abc; HttpOnly; Path=/")
///     .json_body(json!({"status": "OK"}))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    fn status(self, code: u16) -> Self;

    fn header(self, name: &str, value: &str) -> Self;

    /// Add a Set-Cookie header
    ///
    /// The cookie_value should be a complete cookie string like:
    /// `"token=abc; HttpOnly; Path=/"`
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set a JSON body along with its Content-Type header
    fn json_body(self, body: Value) -> Self;

    fn build(self) -> Self::Response;
}

/// Outcome labels carried in the `status` field of every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    Created,
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalServerError,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::UnprocessableEntity => 422,
            Self::InternalServerError => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Created => "Created",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

/// Shapes responses into the `{status, message, data}` envelope.
///
/// Implemented for every `AuthResponseBuilder`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    fn envelope(self, status: ResponseStatus, message: &str, data: Value) -> Self {
        self.status(status.code()).json_body(serde_json::json!({
            "status": status.as_str(),
            "message": message,
            "data": data,
        }))
    }

    fn success(self, status: ResponseStatus, message: &str, data: Value) -> Self::Response {
        self.envelope(status, message, data).build()
    }

    fn failure(self, status: ResponseStatus, message: &str) -> Self::Response {
        self.envelope(status, message, Value::Null).build()
    }
}

impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}

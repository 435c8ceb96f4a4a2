use crate::http_abstraction::AuthRequest;

/// Trait for validating session credentials carried by a request.
///
/// Validators look up the credential wherever their scheme carries it (a cookie for
/// session tokens), verify it, and produce the identity handed to protected routes.
///
/// Validation is synchronous: a self-verifying token needs no I/O, so the request
/// is never held across an await point.
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The identity extracted from a valid credential.
    ///
    /// Protected route handlers receive this through request extensions.
    type Identity: Clone + Send + Sync + 'static;

    /// Errors that can occur during validation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate the credential carried by `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credential is present
    /// - The credential cannot be decoded or its signature does not verify
    /// - The credential identifies nobody or has expired
    fn validate<R: AuthRequest>(&self, request: &R) -> Result<Self::Identity, Self::Error>;
}

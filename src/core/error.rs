//! Typed error handling for the action layer
//!
//! Recoverable failures (validation, business rules) never travel through
//! these types — they are ordinary [`ActionOutcome::Failure`] values. The
//! types here cover the remaining cases:
//!
//! - [`AuthError`]: errors from the credential provider, split into the
//!   sub-type the sign-in action maps to a friendly message and the
//!   sub-types it rethrows.
//! - [`AppError`]: catch-all for unexpected failures escaping an action,
//!   rendered as an HTTP 500 by the server surface.
//!
//! [`ActionOutcome::Failure`]: crate::core::outcome::ActionOutcome

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Errors surfaced by an [`AuthProvider`](crate::core::auth::AuthProvider).
///
/// The sign-in action handles these non-uniformly: `InvalidCredentials`
/// becomes the fixed "Invalid credentials." message, any other provider
/// error becomes a generic failure string, and `Unexpected` is rethrown so
/// upstream infrastructure sees the original failure.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider recognized the credentials and rejected them.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Any other auth-specific failure (provider misconfiguration,
    /// upstream account lockout, ...).
    #[error("authentication failed: {0}")]
    Provider(String),

    /// A failure that is not an authentication error at all.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Error response body for HTTP rendering of unexpected failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Wrapper turning an escaped `anyhow::Error` into an HTTP 500.
///
/// Only rethrown errors reach this type; everything an action recovers from
/// is already an `ActionOutcome`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: "INTERNAL_ERROR".to_string(),
            message: self.0.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "unhandled action error");
        let body = Json(self.to_response());
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

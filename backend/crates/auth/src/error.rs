//! Auth Error Types
//!
//! Every way the session gate can refuse a request. The variant is kept for
//! local diagnostics; clients only ever see a uniform 401, or a 503 when the
//! session store itself is down.

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// The single message every authentication failure renders as
pub const UNAUTHENTICATED_MESSAGE: &str = "Authentication required";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session cookie, or an empty one
    #[error("Missing session cookie")]
    MissingCredential,

    /// Cookie value failed signature verification
    #[error("Invalid session signature: {0}")]
    InvalidSignature(#[source] TokenError),

    /// Signature is valid but no session row carries that token
    #[error("Session not found")]
    SessionNotFound,

    /// Session expiry is at or before now
    #[error("Session expired")]
    SessionExpired,

    /// Session references a user that does not exist
    #[error("User not found for session")]
    UserNotFound,

    /// Session store could not answer (pool exhausted, connection lost)
    #[error("Session store unavailable: {0}")]
    RepositoryUnavailable(#[source] AppError),

    /// Storage answered with an error that is not an outage
    #[error("Internal error: {0}")]
    Internal(#[source] AppError),
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::InvalidSignature(err)
    }
}

impl AuthError {
    /// Internal reason code, for logs only
    ///
    /// Signature failures report the verifier's sub-reason.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::InvalidSignature(e) => e.code(),
            AuthError::SessionNotFound => "session_not_found",
            AuthError::SessionExpired => "session_expired",
            AuthError::UserNotFound => "user_not_found",
            AuthError::RepositoryUnavailable(_) => "repository_unavailable",
            AuthError::Internal(_) => "internal",
        }
    }

    /// Whether this is a credential problem rather than a server fault
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::MissingCredential
                | AuthError::InvalidSignature(_)
                | AuthError::SessionNotFound
                | AuthError::SessionExpired
                | AuthError::UserNotFound
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            _ if self.is_unauthenticated() => StatusCode::UNAUTHORIZED,
            AuthError::RepositoryUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            _ if self.is_unauthenticated() => ErrorKind::Unauthorized,
            AuthError::RepositoryUnavailable(_) => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// Convert to the client-facing AppError
    ///
    /// All authentication failures collapse to the same message; the reason
    /// code travels only as `internal_code`.
    pub fn to_app_error(&self) -> AppError {
        let app_error = match self {
            _ if self.is_unauthenticated() => AppError::unauthorized(UNAUTHENTICATED_MESSAGE),
            AuthError::RepositoryUnavailable(e) => {
                AppError::service_unavailable(e.message().to_owned())
            }
            _ => AppError::internal("Internal error"),
        };
        app_error.with_internal_code(self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::RepositoryUnavailable(e) => {
                tracing::error!(error = %e, reason = self.code(), "Session store unavailable");
            }
            AuthError::Internal(e) => {
                tracing::error!(error = %e, reason = self.code(), "Auth internal error");
            }
            _ => {
                tracing::debug!(reason = self.code(), "Rejected unauthenticated request");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let unauthenticated = self.is_unauthenticated();
        let mut response = self.to_app_error().into_response();

        if unauthenticated {
            response
                .headers_mut()
                .insert("X-Auth-Required", HeaderValue::from_static("true"));
        }

        response
    }
}

/// Outages stay distinct from other server faults.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::ServiceUnavailable => AuthError::RepositoryUnavailable(err),
            _ => AuthError::Internal(err),
        }
    }
}

/// Repository queries classify driver errors through the kernel.
impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AppError::from(err).into()
    }
}

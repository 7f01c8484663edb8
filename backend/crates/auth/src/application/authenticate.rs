//! Authenticate Use Case
//!
//! The session gate: cookie → signature → session → expiry → user.
//! Each step is a precondition for the next, and each has its own rejection.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use platform::cookie::extract_cookie;
use platform::token::verify_session_token;

use crate::application::config::AuthConfig;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// An authenticated request: the live session and the user who owns it
#[derive(Debug, Clone)]
pub struct Identity {
    pub session: Session,
    pub user: User,
}

/// Authenticate a request from its headers, against the current clock
pub async fn authenticate<R>(
    headers: &HeaderMap,
    repo: &R,
    config: &AuthConfig,
) -> AuthResult<Identity>
where
    R: SessionRepository,
{
    authenticate_at(headers, repo, config, Utc::now()).await
}

/// Authenticate a request from its headers as of `now`
pub async fn authenticate_at<R>(
    headers: &HeaderMap,
    repo: &R,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> AuthResult<Identity>
where
    R: SessionRepository,
{
    let cookie = extract_cookie(headers, &config.session_cookie_name);
    authenticate_cookie_at(cookie.as_deref(), repo, config, now).await
}

/// Authenticate a raw cookie value as of `now`
///
/// Repository errors are returned as-is (`RepositoryUnavailable`); they are
/// never turned into an authentication failure.
pub async fn authenticate_cookie_at<R>(
    cookie: Option<&str>,
    repo: &R,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> AuthResult<Identity>
where
    R: SessionRepository,
{
    let token = match cookie {
        Some(value) if !value.is_empty() => value,
        _ => {
            tracing::info!(
                cookie_name = %config.session_cookie_name,
                "Authentication failed: missing session cookie"
            );
            return Err(AuthError::MissingCredential);
        }
    };

    let session_token = verify_session_token(token, &config.session_secret).map_err(|e| {
        tracing::warn!(reason = e.code(), error = %e, "Authentication failed: invalid session signature");
        AuthError::InvalidSignature(e)
    })?;

    let Some(session) = repo.find_session_by_token(session_token).await? else {
        tracing::warn!("Authentication failed: session not found");
        return Err(AuthError::SessionNotFound);
    };

    if session.is_expired_at(now) {
        tracing::warn!(
            session_id = %session.id,
            expires_at = %session.expires_at,
            "Authentication failed: session expired"
        );
        return Err(AuthError::SessionExpired);
    }

    let Some(user) = repo.find_user_by_id(&session.user_id).await? else {
        tracing::error!(
            session_id = %session.id,
            user_id = %session.user_id,
            "Authentication failed: session references a missing user"
        );
        return Err(AuthError::UserNotFound);
    };

    tracing::info!(user_id = %user.id, email = %user.email, "User authenticated");

    Ok(Identity { session, user })
}

/// Authenticate use case
///
/// Holds the repository and configuration for handlers and middleware.
pub struct AuthenticateUseCase<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Authenticate a request
    pub async fn execute(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        authenticate(headers, self.repo.as_ref(), &self.config).await
    }
}

//! HTTP Handlers
//!
//! Handlers run behind [`require_session`](super::middleware::require_session),
//! which stores the [`Identity`] in request extensions.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::{AuthConfig, Identity};
use crate::domain::repository::SessionRepository;
use crate::presentation::dto::{MeResponse, SessionResponse};

/// Shared state for auth handlers and middleware
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// GET /me
pub async fn me(Extension(identity): Extension<Identity>) -> Json<MeResponse> {
    Json(MeResponse::from(&identity))
}

/// GET /session
pub async fn session_info(Extension(identity): Extension<Identity>) -> Json<SessionResponse> {
    Json(SessionResponse::from(&identity))
}

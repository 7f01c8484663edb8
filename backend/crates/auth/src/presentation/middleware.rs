//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid session
///
/// On success the [`Identity`](crate::application::Identity) is inserted into
/// request extensions. Authentication failures become a uniform 401; storage
/// failures become 503.
pub async fn require_session<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
    let identity = use_case.execute(req.headers()).await?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

//! Top-level routes
//!
//! Public liveness and readiness endpoints plus the session-protected routes.

use auth::{AuthConfig, AuthResult, PgAuthRepository, auth_router};
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

pub fn app_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(repo.clone());

    public.merge(auth_router(repo, config))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Session gate is running" }))
}

/// Readiness: the session store answers a trivial query
async fn health(State(repo): State<PgAuthRepository>) -> AuthResult<Json<Value>> {
    repo.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}

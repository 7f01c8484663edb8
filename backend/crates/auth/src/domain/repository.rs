//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::UserId;
use crate::error::AuthResult;

/// Read-only lookups the session gate depends on
///
/// Both methods return `Ok(None)` when the row does not exist and
/// `Err(AuthError::RepositoryUnavailable)` when storage cannot answer.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Find a session by its signed token (the `token` column, not `id`)
    async fn find_session_by_token(&self, token: &str) -> AuthResult<Option<Session>>;

    /// Find user by ID
    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;
}

//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::Identity;

/// GET /me response
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&Identity> for MeResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.user.id.to_string(),
            email: identity.user.email.to_string(),
            name: identity.user.name.clone(),
        }
    }
}

/// GET /session response
///
/// The session token is never echoed back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub email_verified: bool,
}

impl From<&Identity> for SessionResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            session_id: identity.session.id.to_string(),
            user_id: identity.user.id.to_string(),
            expires_at: identity.session.expires_at,
            email_verified: identity.user.email_verified,
        }
    }
}

//! Session Entity
//!
//! Represents one login. The `token` column holds the session identifier that
//! the cookie signs; `id` is the row's primary key and is never sent to clients.
//!
//! Expiry is evaluated at read time. Expired rows may still exist in storage.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{SessionId, UserId};

/// Session entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    /// Opaque identifier covered by the cookie signature (unique)
    pub token: String,
    /// Owning user (cascade-delete)
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    /// Client IP at sign-in
    pub ip_address: Option<String>,
    /// User agent at sign-in
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is expired at `now`
    ///
    /// A session whose expiry equals `now` is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_expiring_at(expires_at: DateTime<Utc>) -> Session {
        Session {
            id: SessionId::new("sess-1"),
            token: "abc123".to_string(),
            user_id: UserId::new("user-1"),
            expires_at,
            ip_address: None,
            user_agent: None,
            created_at: expires_at - Duration::days(7),
            updated_at: expires_at - Duration::days(7),
        }
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let session = session_expiring_at(now);
        assert!(session.is_expired_at(now));
        assert!(!session.is_expired_at(now - Duration::milliseconds(1)));
        assert!(session.is_expired_at(now + Duration::milliseconds(1)));
    }
}

//! User Entity
//!
//! Identity record. Owns sessions and accounts; deleting a user cascades to
//! both at the storage layer.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{UserId, email::Email};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Immutable unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Unique email address
    pub email: Email,
    /// Whether the email address has been confirmed
    pub email_verified: bool,
    /// Avatar reference (URL)
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

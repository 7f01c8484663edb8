//! Verification Entity
//!
//! Short-lived identifier/value pair (email confirmation and similar flows).
//! Shares the schema with sessions but is never consulted by the gate.

use chrono::{DateTime, Utc};

use crate::domain::value_object::VerificationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub id: VerificationId,
    /// What is being verified (e.g. an email address)
    pub identifier: String,
    /// The secret value the user must present
    pub value: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

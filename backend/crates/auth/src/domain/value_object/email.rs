//! Email Value Object
//!
//! Addresses are owned by the sign-in service and validated there; this system
//! only reads them back from storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_db_is_untouched() {
        let email = Email::from_db("Legacy@Example.com");
        assert_eq!(email.as_str(), "Legacy@Example.com");
        assert_eq!(email.to_string(), "Legacy@Example.com");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Email::from_db("ada@example.com")).unwrap();
        assert_eq!(json, "\"ada@example.com\"");
    }
}

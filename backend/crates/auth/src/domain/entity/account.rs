//! Account Entity
//!
//! A credential linked to a user: an OAuth provider grant or a password record.
//! The session gate never reads accounts; the type exists because the table is
//! part of the shared schema and cascades from `users`.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::value_object::{AccountId, UserId};

/// Account entity
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    /// Account id at the provider (e.g. the OAuth subject)
    pub account_id: String,
    /// Provider identifier (e.g. `github`, `credential`)
    pub provider_id: String,
    pub user_id: UserId,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub id_token: Option<String>,
    pub access_token_expires_at: Option<DateTime<Utc>>,
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
    pub scope: Option<String>,
    /// Password hash for credential accounts
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tokens and password hashes never reach logs.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if value.is_some() { "[REDACTED]" } else { "None" }
        }

        f.debug_struct("Account")
            .field("id", &self.id)
            .field("account_id", &self.account_id)
            .field("provider_id", &self.provider_id)
            .field("user_id", &self.user_id)
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("id_token", &redact(&self.id_token))
            .field("access_token_expires_at", &self.access_token_expires_at)
            .field("refresh_token_expires_at", &self.refresh_token_expires_at)
            .field("scope", &self.scope)
            .field("password", &redact(&self.password))
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(provider_id: &str) -> Account {
        let now = Utc::now();
        Account {
            id: AccountId::new("acc-1"),
            account_id: "gh-4242".to_string(),
            provider_id: provider_id.to_string(),
            user_id: UserId::new("user-1"),
            access_token: Some("gho_secret_token".to_string()),
            refresh_token: None,
            id_token: None,
            access_token_expires_at: None,
            refresh_token_expires_at: None,
            scope: Some("read:user".to_string()),
            password: Some("$argon2id$v=19$hash".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", account("github"));
        assert!(!debug.contains("gho_secret_token"));
        assert!(!debug.contains("argon2id"));
        assert!(debug.contains("read:user"));
        assert!(debug.contains("[REDACTED]"));
    }
}

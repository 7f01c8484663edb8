//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! passed into the gate; nothing here is global.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Re-export the secret wrapper from platform
pub use platform::crypto::SessionSecret;

/// Cookie name used by the sign-in service unless configured otherwise
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "better-auth.session_token";

/// Signing scheme of the session cookie
///
/// Only HMAC-SHA256 exists; the setting is validated so a misconfigured
/// deployment fails at startup instead of rejecting every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningAlgorithm {
    #[default]
    HmacSha256,
}

impl SigningAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::HmacSha256 => "HS256",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration could not be built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported session signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Session secret must not be empty")]
    EmptySecret,

    #[error("Session cookie name must not be empty")]
    EmptyCookieName,
}

impl FromStr for SigningAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HS256" | "HMAC-SHA256" | "HMACSHA256" | "SHA256" => Ok(SigningAlgorithm::HmacSha256),
            _ => Err(ConfigError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Shared HMAC key (same secret the sign-in service signs with)
    pub session_secret: SessionSecret,
    /// Signing scheme
    pub algorithm: SigningAlgorithm,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            session_secret: SessionSecret::default(),
            algorithm: SigningAlgorithm::default(),
        }
    }
}

impl AuthConfig {
    /// Build a validated configuration
    pub fn new(
        session_cookie_name: impl Into<String>,
        session_secret: SessionSecret,
        algorithm: SigningAlgorithm,
    ) -> Result<Self, ConfigError> {
        let session_cookie_name = session_cookie_name.into();

        if session_cookie_name.trim().is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }
        if session_secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        Ok(Self {
            session_cookie_name,
            session_secret,
            algorithm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("HS256".parse(), Ok(SigningAlgorithm::HmacSha256));
        assert_eq!("hmac-sha256".parse(), Ok(SigningAlgorithm::HmacSha256));
        assert_eq!(" sha256 ".parse(), Ok(SigningAlgorithm::HmacSha256));
        assert_eq!(
            "RS256".parse::<SigningAlgorithm>(),
            Err(ConfigError::UnsupportedAlgorithm("RS256".to_string()))
        );
    }

    #[test]
    fn test_new_validates() {
        let secret = SessionSecret::from("s3cr3t");
        assert!(AuthConfig::new("sid", secret.clone(), SigningAlgorithm::HmacSha256).is_ok());
        assert_eq!(
            AuthConfig::new(" ", secret, SigningAlgorithm::HmacSha256).unwrap_err(),
            ConfigError::EmptyCookieName
        );
        assert_eq!(
            AuthConfig::new("sid", SessionSecret::default(), SigningAlgorithm::HmacSha256)
                .unwrap_err(),
            ConfigError::EmptySecret
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = AuthConfig {
            session_secret: SessionSecret::from("super-secret-value"),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains(DEFAULT_SESSION_COOKIE_NAME));
    }
}

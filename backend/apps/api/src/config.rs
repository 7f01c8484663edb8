//! Server Settings
//!
//! Everything the binary reads from the environment, loaded once at startup.

use std::net::SocketAddr;

use auth::config::{AuthConfig, ConfigError, DEFAULT_SESSION_COOKIE_NAME, SessionSecret};
use kernel::error::app_error::AppError;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error(transparent)]
    Auth(#[from] ConfigError),
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::internal(err.to_string()).with_internal_code("invalid_settings")
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl Settings {
    /// Load from process environment
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(SettingsError::Missing("DATABASE_URL"))?;
        let secret =
            get("AUTH_SESSION_SECRET").ok_or(SettingsError::Missing("AUTH_SESSION_SECRET"))?;

        let algorithm = get("AUTH_SESSION_ALGORITHM")
            .as_deref()
            .unwrap_or("HS256")
            .parse()?;
        let cookie_name = get("AUTH_SESSION_COOKIE_NAME")
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE_NAME.to_string());
        let auth = AuthConfig::new(cookie_name, SessionSecret::new(secret), algorithm)?;

        let bind_addr = parse_addr("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or(SettingsError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    value,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .as_deref()
            .unwrap_or(DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            database_url,
            db_max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

fn parse_addr(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<SocketAddr, SettingsError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|_| SettingsError::Invalid { name, value: raw })
}

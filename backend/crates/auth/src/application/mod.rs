//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;

// Re-exports
pub use authenticate::{
    AuthenticateUseCase, Identity, authenticate, authenticate_at, authenticate_cookie_at,
};
pub use config::{AuthConfig, ConfigError, SigningAlgorithm};

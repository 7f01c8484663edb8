//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - The session gate and its configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP middleware, handlers, DTOs, router
//!
//! ## Security Model
//! - Sessions are issued elsewhere; this crate only verifies them
//! - The cookie carries `<session token>.<HMAC-SHA256 signature>`
//! - Signatures are compared in constant time
//! - Expiry is checked at read time; a session expiring exactly now is expired
//! - Clients get one uniform 401 for every credential problem; storage
//!   outages are reported separately as 503

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{Identity, authenticate};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

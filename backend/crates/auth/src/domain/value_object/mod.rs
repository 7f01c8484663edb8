//! Value Object Module

pub mod email;

pub use kernel::id::{AccountId, SessionId, UserId, VerificationId};

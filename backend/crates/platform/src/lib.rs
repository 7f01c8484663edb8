//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, constant-time comparison, secrets)
//! - Signed session token codec and verifier
//! - Cookie extraction

pub mod cookie;
pub mod crypto;
pub mod token;

//! Signed Session Tokens
//!
//! A session cookie carries `<session_id>.<signature>` where the signature is
//! `HMAC-SHA256(secret, session_id)` in URL-safe base64 without padding.
//! The transport may additionally percent-escape the value.
//!
//! This module only verifies tokens. [`sign_session_id`] exists as the inverse
//! of [`verify_session_token`] for callers that need to build fixtures.

use std::borrow::Cow;

use base64::{DecodeError, Engine, engine::general_purpose};
use thiserror::Error;

use crate::crypto::{SessionSecret, constant_time_eq, hmac_sha256};

/// Separator between session id and signature
const TOKEN_SEPARATOR: char = '.';

/// Why a session token was rejected
///
/// Callers must not forward the variant to the client; it is for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token has no `.` separator
    #[error("Session token has no signature separator")]
    BadFormat,

    /// Signature is not valid percent-escaped URL-safe base64
    #[error("Session signature is not valid base64url: {0}")]
    MalformedEncoding(String),

    /// Signature decoded but does not match the expected HMAC
    #[error("Session signature does not match")]
    SignatureMismatch,
}

impl TokenError {
    /// Stable reason code for structured logs
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::BadFormat => "bad_format",
            TokenError::MalformedEncoding(_) => "malformed_encoding",
            TokenError::SignatureMismatch => "signature_mismatch",
        }
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Decode a transport-format signature into raw bytes
///
/// 1. Percent-decode with form semantics (`+` is a space, `%2B` is `+`).
/// 2. Restore the `=` padding from the length modulo 4.
/// 3. Decode with the URL-safe alphabet.
pub fn decode_signature(signature: &str) -> Result<Vec<u8>, TokenError> {
    let unescaped = percent_decode_plus(signature)?;

    let padded: Cow<'_, str> = match unescaped.len() % 4 {
        0 => Cow::Borrowed(&*unescaped),
        2 => Cow::Owned(format!("{unescaped}==")),
        3 => Cow::Owned(format!("{unescaped}=")),
        // A base64 string can never leave a single dangling character.
        _ => {
            return Err(TokenError::MalformedEncoding(format!(
                "invalid length {}",
                unescaped.len()
            )));
        }
    };

    general_purpose::URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|e| match e {
            // Non-zero trailing bits never come from encoding a real MAC.
            DecodeError::InvalidLastSymbol(..) => TokenError::SignatureMismatch,
            other => TokenError::MalformedEncoding(other.to_string()),
        })
}

/// Encode raw signature bytes as URL-safe base64 without padding
pub fn encode_signature(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn percent_decode_plus(input: &str) -> Result<Cow<'_, str>, TokenError> {
    if !input.contains(['%', '+']) {
        return Ok(Cow::Borrowed(input));
    }

    let spaced = input.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| Cow::Owned(decoded.into_owned()))
        .map_err(|e| TokenError::MalformedEncoding(format!("percent-decoding failed: {e}")))
}

// ============================================================================
// Verifier
// ============================================================================

/// Verify a signed session token and return the session id it carries
///
/// The token is split on the first `.` only; the remainder is the signature.
pub fn verify_session_token<'a>(
    token: &'a str,
    secret: &SessionSecret,
) -> Result<&'a str, TokenError> {
    let (session_id, signature) = token
        .split_once(TOKEN_SEPARATOR)
        .ok_or(TokenError::BadFormat)?;

    let expected = hmac_sha256(secret.expose(), session_id.as_bytes());
    let received = decode_signature(signature)?;

    if !constant_time_eq(&expected, &received) {
        return Err(TokenError::SignatureMismatch);
    }

    tracing::debug!("Session token signature verified");
    Ok(session_id)
}

/// Build `<session_id>.<signature>` for a session id
pub fn sign_session_id(session_id: &str, secret: &SessionSecret) -> String {
    let mac = hmac_sha256(secret.expose(), session_id.as_bytes());
    format!("{session_id}{TOKEN_SEPARATOR}{}", encode_signature(&mac))
}

//! Cryptographic Utilities

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha256 = Hmac<Sha256>;

/// Output length of HMAC-SHA256 in bytes
pub const HMAC_SHA256_LEN: usize = 32;

/// Shared HMAC key used to sign session identifiers
///
/// Any length is accepted; the sign-in service uses its configured secret
/// string as-is. The bytes are wiped on drop and never printed.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SessionSecret(Vec<u8>);

impl SessionSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SessionSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes())
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionSecret([REDACTED; {}])", self.0.len())
    }
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; HMAC_SHA256_LEN] {
    // HMAC is defined for keys of every length (long keys are hashed first).
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Constant-time comparison to prevent timing attacks
///
/// Only the lengths may leak; the position of the first differing byte does not.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_known_value() {
        // RFC 4231 style vector, widely published for HMAC-SHA256
        let mac = hmac_sha256(b"key", b"The quick brown fox jumps over the lazy dog");
        let expected =
            hex::decode("f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_hmac_session_vector() {
        let mac = hmac_sha256(b"s3cr3t", b"abc123");
        let expected =
            hex::decode("0688b6c3e21ee8144a8619256065e4221aee957b973908fb1ddc99e1021a9db9")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_hmac_key_sensitivity() {
        let data = b"session-id";
        assert_ne!(hmac_sha256(b"secret-a", data), hmac_sha256(b"secret-b", data));
        assert_eq!(hmac_sha256(b"", data), hmac_sha256(b"", data));
    }

    #[test]
    fn test_constant_time_eq() {
        let a = [1u8, 2, 3, 4];
        let b = [1u8, 2, 3, 4];
        let c = [1u8, 2, 3, 5];
        assert!(constant_time_eq(&a, &b));
        assert!(!constant_time_eq(&a, &c));
        assert!(!constant_time_eq(&a, &a[..3]));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = SessionSecret::from("s3cr3t");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("s3cr3t"));
        assert_eq!(debug, "SessionSecret([REDACTED; 6])");
        assert_eq!(secret.expose(), b"s3cr3t");
    }
}

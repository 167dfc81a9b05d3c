//! HMAC helpers for signed payload verification.
//!
//! # Security
//!
//! Signature comparisons go through [`constant_time_compare`] so a mismatch
//! does not leak how many leading bytes were correct.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_app_auth::auth::hmac::{compute_signature_base64url, constant_time_compare};
//!
//! let signature = compute_signature_base64url(b"header.payload", "client-secret");
//! assert_eq!(signature.len(), 43); // 32 bytes, unpadded
//! assert!(constant_time_compare(&signature, &signature.clone()));
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes an HMAC-SHA256 signature, returning URL-safe base64 without padding.
///
/// This is the encoding BigCommerce uses for the third segment of a
/// `signed_payload_jwt`.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature_base64url(message: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Performs constant-time comparison of two strings.
///
/// Returns `true` if the strings are equal.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_signature_matches_known_value() {
        // HMAC-SHA256("message", "key") = 6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a
        let sig = compute_signature_base64url(b"message", "key");
        assert_eq!(sig, "bp7ym3X__Ft6uuUn1Y_a2y_kLnIZARl2kXNDBl9Y7Uo");
    }

    #[test]
    fn test_compute_signature_is_url_safe_and_unpadded() {
        let messages: [&[u8]; 4] = [b"", b"a", b"header.payload", &[0xff, 0xfe, 0x00]];
        for message in messages {
            let sig = compute_signature_base64url(message, "secret");
            assert_eq!(sig.len(), 43);
            assert!(sig
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn test_compute_signature_depends_on_secret() {
        assert_ne!(
            compute_signature_base64url(b"data", "secret-a"),
            compute_signature_base64url(b"data", "secret-b")
        );
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("short", "longer string"));
        assert!(!constant_time_compare("ABC", "abc"));
    }
}

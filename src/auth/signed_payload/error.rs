//! Errors raised while verifying a signed payload token.

use thiserror::Error;

/// Errors that can occur while verifying a `signed_payload_jwt`.
///
/// The first three variants are the verifier's own rejections. A payload that
/// is authentic but cannot be decoded into claims surfaces as
/// [`SignedPayloadError::Payload`], carrying a separate
/// [`PayloadDecodeError`] so callers can tell a decode problem apart from a
/// forged or expired token.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::auth::signed_payload::SignedPayloadError;
///
/// fn is_unauthorized(err: &SignedPayloadError) -> bool {
///     match err {
///         SignedPayloadError::MalformedToken
///         | SignedPayloadError::InvalidSignature
///         | SignedPayloadError::TokenNotInLifetimeWindow { .. } => true,
///         SignedPayloadError::Payload(_) => false,
///     }
/// }
///
/// assert!(is_unauthorized(&SignedPayloadError::InvalidSignature));
/// ```
#[derive(Debug, Error)]
pub enum SignedPayloadError {
    /// The token is not exactly three non-empty dot-separated segments.
    #[error("Malformed signed_payload_jwt")]
    MalformedToken,

    /// The recomputed HMAC does not match the token's signature segment.
    #[error("Invalid signed_payload_jwt signature")]
    InvalidSignature,

    /// The current time is outside `[nbf, exp)`.
    #[error("signed_payload_jwt expired or not yet valid (now {now}, nbf {nbf}, exp {exp})")]
    TokenNotInLifetimeWindow {
        /// Clock reading used for the check, Unix seconds.
        now: i64,
        /// The token's `nbf` claim.
        nbf: i64,
        /// The token's `exp` claim.
        exp: i64,
    },

    /// The signature is valid but the payload could not be decoded.
    #[error(transparent)]
    Payload(#[from] PayloadDecodeError),
}

/// The payload segment could not be decoded into claims.
#[derive(Debug, Error)]
pub enum PayloadDecodeError {
    /// The segment is not valid unpadded base64url.
    #[error("Signed payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid claims JSON document.
    #[error("Signed payload is not valid claims JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SignedPayloadError>();
    assert_send_sync::<PayloadDecodeError>();
};

//! Verification of BigCommerce signed payload tokens.
//!
//! BigCommerce calls an app's load, uninstall, and remove-user callbacks with
//! a `signed_payload_jwt` query parameter: three dot-separated base64url
//! segments (header, claims payload, signature) where the signature is
//! `HMAC-SHA256(client_secret, header + "." + payload)`.
//!
//! - [`SignedPayloadVerifier`]: The verification contract the use cases depend on
//! - [`BigCommerceSignedPayloadVerifier`]: The HMAC-SHA256 implementation
//! - [`SignedPayloadError`]: Why a token was rejected
//!
//! This is not a general JWT implementation: there is no algorithm
//! negotiation, key rotation, or JWKS support.

mod error;
mod verifier;

pub use error::{PayloadDecodeError, SignedPayloadError};
pub use verifier::BigCommerceSignedPayloadVerifier;

use crate::auth::SignedPayloadClaims;
use std::sync::Arc;

/// Verifies a signed payload token and returns its claims.
///
/// Verification is synchronous and performs no I/O. A returned
/// [`SignedPayloadClaims`] has always passed the signature and lifetime
/// checks.
pub trait SignedPayloadVerifier: Send + Sync {
    /// Verifies `token` and decodes its claims.
    ///
    /// # Errors
    ///
    /// Returns a [`SignedPayloadError`] describing the first check that failed.
    fn verify(&self, token: &str) -> Result<SignedPayloadClaims, SignedPayloadError>;
}

impl<T: SignedPayloadVerifier + ?Sized> SignedPayloadVerifier for Arc<T> {
    fn verify(&self, token: &str) -> Result<SignedPayloadClaims, SignedPayloadError> {
        (**self).verify(token)
    }
}

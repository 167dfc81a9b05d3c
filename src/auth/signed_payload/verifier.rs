//! HMAC-SHA256 verification of BigCommerce signed payload tokens.

use crate::auth::clock::{Clock, SystemClock};
use crate::auth::hmac::{compute_signature_base64url, constant_time_compare};
use crate::auth::signed_payload::{PayloadDecodeError, SignedPayloadError, SignedPayloadVerifier};
use crate::auth::SignedPayloadClaims;
use crate::config::{AppConfig, ClientSecret};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// base64url decoder for the payload segment; trailing `=` padding is optional.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Verifies `signed_payload_jwt` tokens with the app's client secret.
///
/// Verification runs these steps in order, stopping at the first failure:
///
/// 1. Split the token into exactly three non-empty segments
///    ([`SignedPayloadError::MalformedToken`]).
/// 2. Recompute `HMAC-SHA256(secret, header + "." + payload)` and compare it
///    in constant time with the signature segment
///    ([`SignedPayloadError::InvalidSignature`]).
/// 3. Decode the payload into [`SignedPayloadClaims`]
///    ([`SignedPayloadError::Payload`]).
/// 4. Require `nbf <= now < exp`
///    ([`SignedPayloadError::TokenNotInLifetimeWindow`]).
///
/// The header segment is only required to be present. Only HMAC-SHA256 is
/// supported.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::auth::clock::FixedClock;
/// use bigcommerce_app_auth::auth::signed_payload::{
///     BigCommerceSignedPayloadVerifier, SignedPayloadError, SignedPayloadVerifier,
/// };
/// use bigcommerce_app_auth::ClientSecret;
///
/// let verifier = BigCommerceSignedPayloadVerifier::with_clock(
///     ClientSecret::new("client-secret").unwrap(),
///     FixedClock(1_700_000_000),
/// );
///
/// let result = verifier.verify("not-a-token");
/// assert!(matches!(result, Err(SignedPayloadError::MalformedToken)));
/// ```
#[derive(Clone, Debug)]
pub struct BigCommerceSignedPayloadVerifier<C = SystemClock> {
    client_secret: ClientSecret,
    clock: C,
}

impl BigCommerceSignedPayloadVerifier {
    /// Creates a verifier that reads the system clock.
    #[must_use]
    pub const fn new(client_secret: ClientSecret) -> Self {
        Self {
            client_secret,
            clock: SystemClock,
        }
    }

    /// Creates a verifier from the app configuration's client secret.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.client_secret().clone())
    }
}

impl<C: Clock> BigCommerceSignedPayloadVerifier<C> {
    /// Creates a verifier with an injected clock.
    #[must_use]
    pub const fn with_clock(client_secret: ClientSecret, clock: C) -> Self {
        Self {
            client_secret,
            clock,
        }
    }

    fn verify_signature(
        &self,
        header: &str,
        payload: &str,
        signature: &str,
    ) -> Result<(), SignedPayloadError> {
        let signing_input = format!("{header}.{payload}");
        let expected =
            compute_signature_base64url(signing_input.as_bytes(), self.client_secret.as_ref());

        if constant_time_compare(&expected, signature) {
            Ok(())
        } else {
            Err(SignedPayloadError::InvalidSignature)
        }
    }

    fn validate_lifetime(&self, claims: &SignedPayloadClaims) -> Result<(), SignedPayloadError> {
        let now = self.clock.now();
        if now < claims.nbf || now >= claims.exp {
            return Err(SignedPayloadError::TokenNotInLifetimeWindow {
                now,
                nbf: claims.nbf,
                exp: claims.exp,
            });
        }
        Ok(())
    }
}

impl<C: Clock> SignedPayloadVerifier for BigCommerceSignedPayloadVerifier<C> {
    fn verify(&self, token: &str) -> Result<SignedPayloadClaims, SignedPayloadError> {
        let result = split_token(token).and_then(|(header, payload, signature)| {
            self.verify_signature(header, payload, signature)?;
            let claims = decode_claims(payload)?;
            self.validate_lifetime(&claims)?;
            Ok(claims)
        });

        match &result {
            Ok(claims) => tracing::debug!(jti = %claims.jti, sub = %claims.sub, "Verified signed payload"),
            Err(e) => tracing::warn!(error = %e, "Rejected signed payload"),
        }

        result
    }
}

fn split_token(token: &str) -> Result<(&str, &str, &str), SignedPayloadError> {
    let mut segments = token.split('.');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok((header, payload, signature))
        }
        _ => Err(SignedPayloadError::MalformedToken),
    }
}

fn decode_claims(payload: &str) -> Result<SignedPayloadClaims, PayloadDecodeError> {
    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

// Verify the verifier is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceSignedPayloadVerifier>();
};

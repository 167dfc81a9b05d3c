//! The load flow: verify the token BigCommerce sends when the app opens.

use crate::auth::signed_payload::{SignedPayloadError, SignedPayloadVerifier};
use crate::auth::SignedPayloadClaims;
use crate::use_cases::UseCase;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Query parameters of the load callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadAppInput {
    /// The signed payload token.
    pub signed_payload_jwt: String,
}

impl LoadAppInput {
    /// Creates an input from the callback's token.
    #[must_use]
    pub fn new(signed_payload_jwt: impl Into<String>) -> Self {
        Self {
            signed_payload_jwt: signed_payload_jwt.into(),
        }
    }
}

/// Verifies the load callback's token and returns its claims.
#[derive(Clone, Debug)]
pub struct LoadApp<V> {
    verifier: V,
}

impl<V: SignedPayloadVerifier> LoadApp<V> {
    /// Creates the use case around `verifier`.
    #[must_use]
    pub const fn new(verifier: V) -> Self {
        Self { verifier }
    }
}

#[async_trait]
impl<V, Ctx> UseCase<LoadAppInput, SignedPayloadClaims, Ctx> for LoadApp<V>
where
    V: SignedPayloadVerifier,
    Ctx: Sync + 'static,
{
    type Error = SignedPayloadError;

    async fn execute(
        &self,
        input: LoadAppInput,
        _context: &Ctx,
    ) -> Result<SignedPayloadClaims, SignedPayloadError> {
        self.verifier.verify(&input.signed_payload_jwt)
    }
}

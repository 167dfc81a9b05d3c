//! The uninstall flow: verify the token sent when a merchant removes the app.

use crate::auth::signed_payload::{SignedPayloadError, SignedPayloadVerifier};
use crate::auth::SignedPayloadClaims;
use crate::store::StoreRepository;
use crate::use_cases::{DecoratorError, UseCase, UseCaseDecorator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Query parameters of the uninstall callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallAppInput {
    /// The signed payload token.
    pub signed_payload_jwt: String,
}

impl UninstallAppInput {
    /// Creates an input from the callback's token.
    #[must_use]
    pub fn new(signed_payload_jwt: impl Into<String>) -> Self {
        Self {
            signed_payload_jwt: signed_payload_jwt.into(),
        }
    }
}

/// Verifies the uninstall callback's token and returns its claims.
#[derive(Clone, Debug)]
pub struct UninstallApp<V> {
    verifier: V,
}

impl<V: SignedPayloadVerifier> UninstallApp<V> {
    /// Creates the use case around `verifier`.
    #[must_use]
    pub const fn new(verifier: V) -> Self {
        Self { verifier }
    }
}

#[async_trait]
impl<V, Ctx> UseCase<UninstallAppInput, SignedPayloadClaims, Ctx> for UninstallApp<V>
where
    V: SignedPayloadVerifier,
    Ctx: Sync + 'static,
{
    type Error = SignedPayloadError;

    async fn execute(
        &self,
        input: UninstallAppInput,
        _context: &Ctx,
    ) -> Result<SignedPayloadClaims, SignedPayloadError> {
        self.verifier.verify(&input.signed_payload_jwt)
    }
}

/// Marks the store inactive after a verified uninstall.
///
/// The store hash is parsed from the claims' `sub` and passed to
/// [`StoreRepository::deactivate_store`].
#[derive(Clone, Debug)]
pub struct DeactivateStoreOnUninstall<U, R> {
    base: UseCaseDecorator<U>,
    stores: R,
}

impl<U, R: StoreRepository> DeactivateStoreOnUninstall<U, R> {
    /// Wraps `inner`, deactivating stores through `stores`.
    #[must_use]
    pub const fn new(inner: U, stores: R) -> Self {
        Self {
            base: UseCaseDecorator::new(inner),
            stores,
        }
    }
}

#[async_trait]
impl<U, R, Ctx> UseCase<UninstallAppInput, SignedPayloadClaims, Ctx>
    for DeactivateStoreOnUninstall<U, R>
where
    U: UseCase<UninstallAppInput, SignedPayloadClaims, Ctx>,
    R: StoreRepository,
    Ctx: Sync + 'static,
{
    type Error = DecoratorError<U::Error>;

    async fn execute(
        &self,
        input: UninstallAppInput,
        context: &Ctx,
    ) -> Result<SignedPayloadClaims, Self::Error> {
        let claims: SignedPayloadClaims = self
            .base
            .execute(input, context)
            .await
            .map_err(DecoratorError::Inner)?;

        let hash = claims.store_hash()?;
        self.stores
            .deactivate_store(&hash)
            .await
            .map_err(DecoratorError::Repository)?;
        tracing::info!(store = %hash, "Deactivated store after uninstall");

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{claims, EventLog, FakeVerifier, RecordingStores};

    fn decorated(
        verified: Option<SignedPayloadClaims>,
        fail: bool,
        log: &EventLog,
    ) -> DeactivateStoreOnUninstall<UninstallApp<FakeVerifier>, RecordingStores> {
        DeactivateStoreOnUninstall::new(
            UninstallApp::new(FakeVerifier::new(verified, log.clone())),
            RecordingStores {
                log: log.clone(),
                fail,
                ..RecordingStores::default()
            },
        )
    }

    #[tokio::test]
    async fn test_returns_verified_claims() {
        let uninstall = UninstallApp::new(FakeVerifier::new(
            Some(claims("stores/abc123")),
            EventLog::default(),
        ));

        let result = uninstall
            .execute(UninstallAppInput::new("token-1"), &())
            .await;

        assert_eq!(result.unwrap(), claims("stores/abc123"));
    }

    #[tokio::test]
    async fn test_deactivates_store_after_verification() {
        let log = EventLog::default();
        let uninstall = decorated(Some(claims("stores/abc123")), false, &log);

        let result = uninstall
            .execute(UninstallAppInput::new("token-1"), &())
            .await;

        assert_eq!(result.unwrap(), claims("stores/abc123"));
        assert_eq!(log.events(), ["verify", "deactivate_store"]);
        let deactivated = uninstall.stores.deactivated.lock().unwrap();
        assert_eq!(deactivated.len(), 1);
        assert_eq!(deactivated[0].as_str(), "abc123");
    }

    #[tokio::test]
    async fn test_rejected_token_leaves_store_untouched() {
        let log = EventLog::default();
        let uninstall = decorated(None, false, &log);

        let result = uninstall
            .execute(UninstallAppInput::new("token-1"), &())
            .await;

        assert!(matches!(
            result,
            Err(DecoratorError::Inner(SignedPayloadError::InvalidSignature))
        ));
        assert_eq!(log.events(), ["verify"]);
    }

    #[tokio::test]
    async fn test_invalid_subject_is_reported() {
        let log = EventLog::default();
        let uninstall = decorated(Some(claims("merchants/abc123")), false, &log);

        let result = uninstall
            .execute(UninstallAppInput::new("token-1"), &())
            .await;

        match result {
            Err(DecoratorError::StoreContext(e)) => {
                assert_eq!(e.context, "sub: merchants/abc123");
            }
            other => panic!("Expected StoreContext error, got: {other:?}"),
        }
        assert_eq!(log.events(), ["verify"]);
    }

    #[tokio::test]
    async fn test_repository_failure_is_reported() {
        let log = EventLog::default();
        let uninstall = decorated(Some(claims("stores/abc123")), true, &log);

        let result = uninstall
            .execute(UninstallAppInput::new("token-1"), &())
            .await;

        assert!(matches!(result, Err(DecoratorError::Repository(_))));
    }
}

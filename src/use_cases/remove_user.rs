//! The remove-user flow: verify the token sent when a store revokes a user's
//! access to the app.

use crate::auth::signed_payload::{SignedPayloadError, SignedPayloadVerifier};
use crate::auth::SignedPayloadClaims;
use crate::store::UserRepository;
use crate::use_cases::{DecoratorError, UseCase, UseCaseDecorator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Query parameters of the remove-user callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveUserInput {
    /// The signed payload token.
    pub signed_payload_jwt: String,
}

impl RemoveUserInput {
    /// Creates an input from the callback's token.
    #[must_use]
    pub fn new(signed_payload_jwt: impl Into<String>) -> Self {
        Self {
            signed_payload_jwt: signed_payload_jwt.into(),
        }
    }
}

/// Verifies the remove-user callback's token and returns its claims.
///
/// The removed user is `claims.user`.
#[derive(Clone, Debug)]
pub struct RemoveUser<V> {
    verifier: V,
}

impl<V: SignedPayloadVerifier> RemoveUser<V> {
    /// Creates the use case around `verifier`.
    #[must_use]
    pub const fn new(verifier: V) -> Self {
        Self { verifier }
    }
}

#[async_trait]
impl<V, Ctx> UseCase<RemoveUserInput, SignedPayloadClaims, Ctx> for RemoveUser<V>
where
    V: SignedPayloadVerifier,
    Ctx: Sync + 'static,
{
    type Error = SignedPayloadError;

    async fn execute(
        &self,
        input: RemoveUserInput,
        _context: &Ctx,
    ) -> Result<SignedPayloadClaims, SignedPayloadError> {
        self.verifier.verify(&input.signed_payload_jwt)
    }
}

/// Removes the user named in verified remove-user claims.
///
/// Calls [`UserRepository::remove_user`] with `claims.user.id` and the store
/// hash parsed from `claims.sub`.
#[derive(Clone, Debug)]
pub struct RemoveUserOnCallback<U, R> {
    base: UseCaseDecorator<U>,
    users: R,
}

impl<U, R: UserRepository> RemoveUserOnCallback<U, R> {
    /// Wraps `inner`, removing users through `users`.
    #[must_use]
    pub const fn new(inner: U, users: R) -> Self {
        Self {
            base: UseCaseDecorator::new(inner),
            users,
        }
    }
}

#[async_trait]
impl<U, R, Ctx> UseCase<RemoveUserInput, SignedPayloadClaims, Ctx> for RemoveUserOnCallback<U, R>
where
    U: UseCase<RemoveUserInput, SignedPayloadClaims, Ctx>,
    R: UserRepository,
    Ctx: Sync + 'static,
{
    type Error = DecoratorError<U::Error>;

    async fn execute(
        &self,
        input: RemoveUserInput,
        context: &Ctx,
    ) -> Result<SignedPayloadClaims, Self::Error> {
        let claims: SignedPayloadClaims = self
            .base
            .execute(input, context)
            .await
            .map_err(DecoratorError::Inner)?;

        let hash = claims.store_hash()?;
        self.users
            .remove_user(claims.user.id, &hash)
            .await
            .map_err(DecoratorError::Repository)?;
        tracing::info!(store = %hash, user_id = claims.user.id, "Removed store user");

        Ok(claims)
    }
}

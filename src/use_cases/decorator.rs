//! Decorators that wrap a use case without changing its contract.
//!
//! [`UseCaseDecorator`] forwards every call to the wrapped use case
//! unchanged. Concrete decorators hold one and add behavior around the
//! forwarded call; the persistence decorators in this crate run their side
//! effect only after the wrapped use case has succeeded, so a failed exchange
//! or a rejected token never reaches a repository.

use crate::error::{BoxError, InvalidStoreContextError};
use crate::use_cases::UseCase;
use async_trait::async_trait;
use thiserror::Error;
use tracing::Instrument;

/// Forwarding base for decorators.
///
/// On its own it behaves exactly like the wrapped use case: same outputs,
/// same errors.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::auth::clock::FixedClock;
/// use bigcommerce_app_auth::auth::signed_payload::BigCommerceSignedPayloadVerifier;
/// use bigcommerce_app_auth::use_cases::{LoadApp, LoadAppInput, UseCase, UseCaseDecorator};
/// use bigcommerce_app_auth::ClientSecret;
///
/// let verifier = BigCommerceSignedPayloadVerifier::with_clock(
///     ClientSecret::new("secret").unwrap(),
///     FixedClock(0),
/// );
/// let decorated = UseCaseDecorator::new(LoadApp::new(verifier));
///
/// # tokio_test::block_on(async {
/// let result = decorated.execute(LoadAppInput::new("malformed"), &()).await;
/// assert!(result.is_err());
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct UseCaseDecorator<U> {
    inner: U,
}

impl<U> UseCaseDecorator<U> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: U) -> Self {
        Self { inner }
    }

    /// Returns the wrapped use case.
    #[must_use]
    pub const fn inner(&self) -> &U {
        &self.inner
    }

    /// Unwraps the decorator.
    #[must_use]
    pub fn into_inner(self) -> U {
        self.inner
    }
}

#[async_trait]
impl<U, In, Out, Ctx> UseCase<In, Out, Ctx> for UseCaseDecorator<U>
where
    U: UseCase<In, Out, Ctx>,
    In: Send + 'static,
    Out: Send + 'static,
    Ctx: Sync + 'static,
{
    type Error = U::Error;

    async fn execute(&self, input: In, context: &Ctx) -> Result<Out, Self::Error> {
        self.inner.execute(input, context).await
    }
}

/// Failure of a decorator that adds a side effect to a use case.
#[derive(Debug, Error)]
pub enum DecoratorError<E> {
    /// The wrapped use case failed. The side effect did not run.
    #[error(transparent)]
    Inner(E),

    /// The use case result did not name a valid store.
    #[error(transparent)]
    StoreContext(#[from] InvalidStoreContextError),

    /// The repository rejected the side effect.
    #[error("Repository operation failed: {0}")]
    Repository(#[source] BoxError),
}

impl<E> DecoratorError<E> {
    /// Returns the wrapped use case's error, if that is what failed.
    #[must_use]
    pub const fn inner(&self) -> Option<&E> {
        match self {
            Self::Inner(e) => Some(e),
            _ => None,
        }
    }

    /// Converts into the wrapped use case's error, if that is what failed.
    #[must_use]
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Inner(e) => Some(e),
            _ => None,
        }
    }
}

/// Runs the wrapped use case inside an `info` span and logs its outcome.
#[derive(Clone, Debug)]
pub struct TracedUseCase<U> {
    base: UseCaseDecorator<U>,
    name: &'static str,
}

impl<U> TracedUseCase<U> {
    /// Wraps `inner`, naming its span `name`.
    #[must_use]
    pub const fn new(name: &'static str, inner: U) -> Self {
        Self {
            base: UseCaseDecorator::new(inner),
            name,
        }
    }

    /// Returns the span name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

#[async_trait]
impl<U, In, Out, Ctx> UseCase<In, Out, Ctx> for TracedUseCase<U>
where
    U: UseCase<In, Out, Ctx>,
    In: Send + 'static,
    Out: Send + 'static,
    Ctx: Sync + 'static,
{
    type Error = U::Error;

    async fn execute(&self, input: In, context: &Ctx) -> Result<Out, Self::Error> {
        let span = tracing::info_span!("use_case", use_case = self.name);
        async move {
            let result = self.base.execute(input, context).await;
            match &result {
                Ok(_) => tracing::debug!("Use case completed"),
                Err(e) => tracing::warn!(error = %e, "Use case failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

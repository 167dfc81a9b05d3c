//! The use case contract shared by every flow and decorator.

use async_trait::async_trait;
use std::sync::Arc;

/// A single application operation: input in, output out.
///
/// `Ctx` is per-invocation auxiliary data threaded through the use case and
/// every decorator wrapped around it. It defaults to `()` for callers that
/// need none; [`ExecutionContext`](crate::use_cases::ExecutionContext) is an
/// open key/value bag for those that do.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use bigcommerce_app_auth::use_cases::UseCase;
/// use std::convert::Infallible;
///
/// struct Double;
///
/// #[async_trait]
/// impl UseCase<u32, u32> for Double {
///     type Error = Infallible;
///
///     async fn execute(&self, input: u32, _context: &()) -> Result<u32, Infallible> {
///         Ok(input * 2)
///     }
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(Double.execute(21_u32, &()).await.unwrap(), 42);
/// # });
/// ```
#[async_trait]
pub trait UseCase<In, Out, Ctx = ()>: Send + Sync
where
    In: Send + 'static,
    Out: Send + 'static,
    Ctx: Sync + 'static,
{
    /// Failure type of this use case.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the use case.
    async fn execute(&self, input: In, context: &Ctx) -> Result<Out, Self::Error>;

    /// Runs the use case with a default (empty) context.
    async fn execute_with_default_context(&self, input: In) -> Result<Out, Self::Error>
    where
        Ctx: Default + Send,
    {
        let context = Ctx::default();
        self.execute(input, &context).await
    }
}

#[async_trait]
impl<T, In, Out, Ctx> UseCase<In, Out, Ctx> for Arc<T>
where
    T: UseCase<In, Out, Ctx> + ?Sized,
    In: Send + 'static,
    Out: Send + 'static,
    Ctx: Sync + 'static,
{
    type Error = T::Error;

    async fn execute(&self, input: In, context: &Ctx) -> Result<Out, Self::Error> {
        (**self).execute(input, context).await
    }
}

#[async_trait]
impl<T, In, Out, Ctx> UseCase<In, Out, Ctx> for Box<T>
where
    T: UseCase<In, Out, Ctx> + ?Sized,
    In: Send + 'static,
    Out: Send + 'static,
    Ctx: Sync + 'static,
{
    type Error = T::Error;

    async fn execute(&self, input: In, context: &Ctx) -> Result<Out, Self::Error> {
        (**self).execute(input, context).await
    }
}

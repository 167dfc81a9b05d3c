//! The install flow: exchange the callback's authorization code.

use crate::auth::oauth::{OAuthClient, OAuthError};
use crate::auth::AuthSession;
use crate::store::{Store, StoreRepository};
use crate::use_cases::{DecoratorError, UseCase, UseCaseDecorator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Values BigCommerce sends to the install callback, plus the app's own
/// callback URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallAppInput {
    /// The one-time authorization code.
    pub code: String,

    /// The store context, `"stores/{hash}"`.
    pub context: String,

    /// The scopes the merchant granted.
    pub scope: String,

    /// The callback URL registered for the app.
    pub redirect_uri: String,
}

impl InstallAppInput {
    /// Creates an input from the callback values.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        context: impl Into<String>,
        scope: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            context: context.into(),
            scope: scope.into(),
            redirect_uri: redirect_uri.into(),
        }
    }
}

/// Exchanges the install callback's code for an [`AuthSession`].
///
/// The input is passed to the [`OAuthClient`] field for field and the session
/// is returned unchanged. Exchange failures propagate as [`OAuthError`].
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_app_auth::auth::oauth::BigCommerceOAuthClient;
/// use bigcommerce_app_auth::use_cases::{InstallApp, InstallAppInput, UseCase};
///
/// let install = InstallApp::new(BigCommerceOAuthClient::new(&config));
/// let session = install
///     .execute(
///         InstallAppInput::new(code, context, scope, "https://app.example.com/auth"),
///         &(),
///     )
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct InstallApp<C> {
    oauth_client: C,
}

impl<C: OAuthClient> InstallApp<C> {
    /// Creates the use case around `oauth_client`.
    #[must_use]
    pub const fn new(oauth_client: C) -> Self {
        Self { oauth_client }
    }
}

#[async_trait]
impl<C, Ctx> UseCase<InstallAppInput, AuthSession, Ctx> for InstallApp<C>
where
    C: OAuthClient,
    Ctx: Sync + 'static,
{
    type Error = OAuthError;

    async fn execute(
        &self,
        input: InstallAppInput,
        _context: &Ctx,
    ) -> Result<AuthSession, OAuthError> {
        self.oauth_client
            .exchange(
                &input.code,
                &input.context,
                &input.scope,
                &input.redirect_uri,
            )
            .await
    }
}

/// Saves the installed store after a successful install.
///
/// The session returned by the wrapped use case is mapped with
/// [`Store::from_auth_session`] and written with
/// [`StoreRepository::upsert_store`] before it is returned.
///
/// If the session's `context` is not a valid store context, nothing is
/// written and the call fails with [`DecoratorError::StoreContext`]. The
/// session, including the access token just issued for it, is not returned
/// in that case; wrap [`InstallApp`] directly to keep it.
#[derive(Clone, Debug)]
pub struct PersistStoreOnInstall<U, R> {
    base: UseCaseDecorator<U>,
    stores: R,
}

impl<U, R: StoreRepository> PersistStoreOnInstall<U, R> {
    /// Wraps `inner`, writing installs to `stores`.
    #[must_use]
    pub const fn new(inner: U, stores: R) -> Self {
        Self {
            base: UseCaseDecorator::new(inner),
            stores,
        }
    }
}

#[async_trait]
impl<U, R, Ctx> UseCase<InstallAppInput, AuthSession, Ctx> for PersistStoreOnInstall<U, R>
where
    U: UseCase<InstallAppInput, AuthSession, Ctx>,
    R: StoreRepository,
    Ctx: Sync + 'static,
{
    type Error = DecoratorError<U::Error>;

    async fn execute(
        &self,
        input: InstallAppInput,
        context: &Ctx,
    ) -> Result<AuthSession, Self::Error> {
        let session: AuthSession = self
            .base
            .execute(input, context)
            .await
            .map_err(DecoratorError::Inner)?;

        let store = Store::from_auth_session(&session)?;
        self.stores
            .upsert_store(&store)
            .await
            .map_err(DecoratorError::Repository)?;
        tracing::info!(store = %store.hash, "Saved store installation");

        Ok(session)
    }
}

//! Application flows for BigCommerce app callbacks.
//!
//! Each flow is a [`UseCase`]: a single `execute(input, context)` operation
//! with no side effects of its own.
//!
//! | Flow | Input | Output | Error |
//! |------|-------|--------|-------|
//! | [`InstallApp`] | [`InstallAppInput`] | [`AuthSession`](crate::AuthSession) | [`OAuthError`](crate::auth::oauth::OAuthError) |
//! | [`LoadApp`] | [`LoadAppInput`] | [`SignedPayloadClaims`](crate::SignedPayloadClaims) | [`SignedPayloadError`](crate::auth::signed_payload::SignedPayloadError) |
//! | [`UninstallApp`] | [`UninstallAppInput`] | [`SignedPayloadClaims`](crate::SignedPayloadClaims) | [`SignedPayloadError`](crate::auth::signed_payload::SignedPayloadError) |
//! | [`RemoveUser`] | [`RemoveUserInput`] | [`SignedPayloadClaims`](crate::SignedPayloadClaims) | [`SignedPayloadError`](crate::auth::signed_payload::SignedPayloadError) |
//!
//! Persistence and other cross-cutting behavior is added by wrapping a flow
//! in a decorator:
//!
//! - [`UseCaseDecorator`]: Forwards unchanged; the base for other decorators
//! - [`PersistStoreOnInstall`]: Upserts the store after an install
//! - [`DeactivateStoreOnUninstall`]: Deactivates the store after an uninstall
//! - [`RemoveUserOnCallback`]: Removes the user after a remove-user callback
//! - [`TracedUseCase`]: Runs the flow inside a tracing span
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_app_auth::use_cases::{
//!     InstallApp, InstallAppInput, PersistStoreOnInstall, TracedUseCase, UseCase,
//! };
//!
//! let install = TracedUseCase::new(
//!     "install",
//!     PersistStoreOnInstall::new(InstallApp::new(oauth_client), store_repository),
//! );
//! let session = install.execute(input, &()).await?;
//! ```

mod context;
mod decorator;
mod install;
mod load;
mod remove_user;
mod uninstall;
mod use_case;

#[cfg(test)]
mod test_support;

pub use context::{
    ExecutionContext, InstallAppContext, LoadAppContext, RemoveUserContext, UninstallAppContext,
};
pub use decorator::{DecoratorError, TracedUseCase, UseCaseDecorator};
pub use install::{InstallApp, InstallAppInput, PersistStoreOnInstall};
pub use load::{LoadApp, LoadAppInput};
pub use remove_user::{RemoveUser, RemoveUserInput, RemoveUserOnCallback};
pub use uninstall::{DeactivateStoreOnUninstall, UninstallApp, UninstallAppInput};
pub use use_case::UseCase;

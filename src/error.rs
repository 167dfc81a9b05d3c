//! Error types for configuration and store identifiers.
//!
//! This module contains the errors raised while building an [`AppConfig`]
//! and while parsing store hashes. Errors specific to the OAuth exchange and
//! to signed payload verification live next to those components in
//! [`crate::auth::oauth`] and [`crate::auth::signed_payload`].
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_app_auth::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```
//!
//! [`AppConfig`]: crate::AppConfig

use thiserror::Error;

/// Boxed error returned by persistence collaborators.
///
/// Repositories are implemented by the embedding application, so their
/// failures are carried opaquely.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building the app configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the app's BigCommerce client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the app's BigCommerce client secret.")]
    EmptyClientSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Token endpoint URL is invalid.
    #[error("Invalid token URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://login.bigcommerce.com/oauth2/token').")]
    InvalidTokenUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// A store hash or store context string could not be parsed.
///
/// Raised by both [`StoreHash`](crate::StoreHash) constructors and by every
/// helper that derives a store hash from a `"stores/{hash}"` context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid BigCommerce store context \"{context}\". Expected \"stores/{{hash}}\".")]
pub struct InvalidStoreContextError {
    /// The rejected input, prefixed with the form it was given in.
    pub context: String,
}

impl InvalidStoreContextError {
    pub(crate) fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
    assert_send_sync::<InvalidStoreContextError>();
};

//! Configuration types for BigCommerce app authentication.
//!
//! # Overview
//!
//! - [`AppConfig`]: The app credentials and token endpoint
//! - [`AppConfigBuilder`]: A builder for constructing [`AppConfig`] instances
//! - [`ClientId`]: A validated client ID newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//! - [`TokenUrl`]: A validated OAuth token endpoint URL
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_app_auth::{AppConfig, ClientId, ClientSecret};
//!
//! let config = AppConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.token_url().as_ref(), "https://login.bigcommerce.com/oauth2/token");
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, TokenUrl};

use crate::error::ConfigError;

/// Configuration for a BigCommerce app.
///
/// Holds the credentials bound into the OAuth client and the signed payload
/// verifier at construction time.
///
/// # Thread Safety
///
/// `AppConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    token_url: TokenUrl,
    user_agent: Option<String>,
}

impl AppConfig {
    /// Creates a new builder for constructing an `AppConfig`.
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::new()
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the OAuth token endpoint.
    #[must_use]
    pub const fn token_url(&self) -> &TokenUrl {
        &self.token_url
    }

    /// Returns the user agent sent with the token exchange, if configured.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

// Verify AppConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppConfig>();
};

/// Builder for constructing [`AppConfig`] instances.
///
/// `client_id` and `client_secret` are required.
///
/// # Defaults
///
/// - `token_url`: `https://login.bigcommerce.com/oauth2/token`
/// - `user_agent`: `None`
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::{AppConfig, ClientId, ClientSecret, TokenUrl};
///
/// let config = AppConfig::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .token_url(TokenUrl::new("http://localhost:8080/oauth2/token").unwrap())
///     .user_agent("my-app/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent(), Some("my-app/1.0"));
/// ```
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    token_url: Option<TokenUrl>,
    user_agent: Option<String>,
}

impl AppConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the OAuth token endpoint.
    #[must_use]
    pub fn token_url(mut self, url: TokenUrl) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Sets the user agent for the token exchange request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the [`AppConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        Ok(AppConfig {
            client_id,
            client_secret,
            token_url: self.token_url.unwrap_or_default(),
            user_agent: self.user_agent,
        })
    }
}

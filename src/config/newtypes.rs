//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the app credentials and the
//! token endpoint URL. Invalid values are rejected on construction.

use crate::error::ConfigError;
use std::fmt;

/// A validated BigCommerce app client ID.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated BigCommerce app client secret.
///
/// The secret is both the OAuth client credential and the HMAC key for
/// signed payload tokens. Its `Debug` output is masked so it never ends up
/// in logs.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated OAuth token endpoint URL.
///
/// Only absolute `http` and `https` URLs with a non-empty host are accepted.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::TokenUrl;
///
/// let url = TokenUrl::default();
/// assert_eq!(url.as_ref(), "https://login.bigcommerce.com/oauth2/token");
///
/// let local = TokenUrl::new("http://127.0.0.1:8080/oauth2/token").unwrap();
/// assert_eq!(local.host_name(), "127.0.0.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl TokenUrl {
    /// The production BigCommerce token endpoint.
    pub const BIGCOMMERCE: &'static str = "https://login.bigcommerce.com/oauth2/token";

    /// Creates a new validated token URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTokenUrl`] if the URL has no `http` or
    /// `https` scheme or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();

        let host_start = if url.starts_with("https://") {
            "https://".len()
        } else if url.starts_with("http://") {
            "http://".len()
        } else {
            return Err(ConfigError::InvalidTokenUrl { url });
        };

        // Host ends at port, path, query, or end of string
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidTokenUrl { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for TokenUrl {
    fn default() -> Self {
        Self {
            url: Self::BIGCOMMERCE.to_string(),
            host_start: "https://".len(),
            host_end: "https://login.bigcommerce.com".len(),
        }
    }
}

impl AsRef<str> for TokenUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_rejects_empty_string() {
        assert!(matches!(
            ClientSecret::new(""),
            Err(ConfigError::EmptyClientSecret)
        ));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_token_url_default_points_at_bigcommerce() {
        let url = TokenUrl::default();
        assert_eq!(url.as_ref(), TokenUrl::BIGCOMMERCE);
        assert_eq!(url.host_name(), "login.bigcommerce.com");
        assert_eq!(TokenUrl::new(TokenUrl::BIGCOMMERCE).unwrap(), url);
    }

    #[test]
    fn test_token_url_accepts_port_and_path() {
        let url = TokenUrl::new("http://localhost:3000/oauth2/token").unwrap();
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_token_url_rejects_invalid() {
        assert!(TokenUrl::new("login.bigcommerce.com/oauth2/token").is_err());
        assert!(TokenUrl::new("ftp://login.bigcommerce.com").is_err());
        assert!(TokenUrl::new("https://").is_err());
        assert!(TokenUrl::new("https:///oauth2/token").is_err());
    }
}

//! OAuth-specific error types.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_app_auth::auth::oauth::OAuthError;
//!
//! let error = OAuthError::TokenExchangeFailed {
//!     status: 401,
//!     status_text: "Unauthorized".to_string(),
//! };
//! assert_eq!(error.to_string(), "BigCommerce token exchange failed: 401 Unauthorized");
//! ```

use thiserror::Error;

/// Errors that can occur while exchanging an authorization code.
///
/// A caller mapping these to its own responses typically treats
/// [`OAuthError::TokenExchangeFailed`] as an upstream failure (a 4xx status
/// as a bad gateway, a 5xx as service unavailable) and
/// [`OAuthError::Transport`] as a network failure.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token endpoint answered with a non-success status.
    #[error("BigCommerce token exchange failed: {status} {status_text}")]
    TokenExchangeFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The canonical reason phrase for the status, if any.
        status_text: String,
    },

    /// The request could not be sent or the response body could not be read.
    ///
    /// The underlying `reqwest` error is passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl OAuthError {
    /// Returns the HTTP status code for a failed exchange.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TokenExchangeFailed { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

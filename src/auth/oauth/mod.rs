//! OAuth install flow for BigCommerce apps.
//!
//! When a merchant installs the app, BigCommerce calls the app's auth
//! callback with `code`, `context`, and `scope`. The app exchanges these for
//! a permanent access token by posting them, together with its client
//! credentials, to `https://login.bigcommerce.com/oauth2/token`.
//!
//! - [`OAuthClient`]: The exchange contract the install use case depends on
//! - [`BigCommerceOAuthClient`]: The `reqwest` implementation
//! - [`OAuthError`]: Exchange failures

mod client;
mod error;

pub use client::{BigCommerceOAuthClient, OAuthClient, LIBRARY_VERSION};
pub use error::OAuthError;

//! # BigCommerce App Auth
//!
//! Authentication building blocks for BigCommerce apps: the OAuth
//! authorization code exchange run at install time, and verification of the
//! signed payload tokens BigCommerce sends to the load, uninstall, and
//! remove-user callbacks.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AppConfig`] and [`AppConfigBuilder`]
//! - A validated [`StoreHash`] and the [`Store`] built from an install
//! - The authorization code exchange via [`auth::oauth`]
//! - HMAC-SHA256 signed payload verification via [`auth::signed_payload`]
//! - One [`use_cases::UseCase`] per callback, plus decorators that persist
//!   installs, uninstalls, and user removals through repository traits you
//!   implement
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_app_auth::{AppConfig, ClientId, ClientSecret};
//!
//! let config = AppConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Install Callback
//!
//! ```rust,ignore
//! use bigcommerce_app_auth::auth::oauth::BigCommerceOAuthClient;
//! use bigcommerce_app_auth::use_cases::{
//!     InstallApp, InstallAppInput, PersistStoreOnInstall, UseCase,
//! };
//!
//! let install = PersistStoreOnInstall::new(
//!     InstallApp::new(BigCommerceOAuthClient::new(&config)),
//!     my_store_repository,
//! );
//!
//! // `code`, `context`, and `scope` come from the callback query string
//! let input = InstallAppInput::new(code, context, scope, "https://your-app.com/auth");
//! let session = install.execute(input, &()).await?;
//! ```
//!
//! ## Load, Uninstall, and Remove-User Callbacks
//!
//! ```rust,ignore
//! use bigcommerce_app_auth::auth::signed_payload::BigCommerceSignedPayloadVerifier;
//! use bigcommerce_app_auth::use_cases::{LoadApp, LoadAppInput, UseCase};
//!
//! let load = LoadApp::new(BigCommerceSignedPayloadVerifier::from_config(&config));
//!
//! let claims = load.execute(LoadAppInput::new(signed_payload_jwt), &()).await?;
//! let store_hash = claims.store_hash()?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **No hidden persistence**: Base use cases only exchange or verify; side
//!   effects live in decorators
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod config;
pub mod error;
pub mod store;
pub mod use_cases;

// Re-export public types at crate root for convenience
pub use auth::{AuthSession, ClaimsOwner, ClaimsUser, SessionUser, SignedPayloadClaims};
pub use config::{AppConfig, AppConfigBuilder, ClientId, ClientSecret, TokenUrl};
pub use error::{BoxError, ConfigError, InvalidStoreContextError};
pub use store::{Store, StoreHash, StoreRepository, UserRepository};

// Re-export the OAuth and signed payload entry points
pub use auth::oauth::{BigCommerceOAuthClient, OAuthClient, OAuthError};
pub use auth::signed_payload::{
    BigCommerceSignedPayloadVerifier, SignedPayloadError, SignedPayloadVerifier,
};

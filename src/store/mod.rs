//! Store installations and the persistence contracts around them.
//!
//! # Overview
//!
//! - [`StoreHash`]: Validated store identifier
//! - [`Store`]: A store installation, built from an [`AuthSession`]
//! - [`StoreRepository`] and [`UserRepository`]: Persistence contracts the
//!   embedding application implements. This crate never persists anything
//!   itself; the ready-made decorators in [`crate::use_cases`] call these
//!   contracts after a flow succeeds.

mod hash;

pub use hash::StoreHash;

use crate::auth::AuthSession;
use crate::error::{BoxError, InvalidStoreContextError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A BigCommerce store installation.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::{AuthSession, Store};
///
/// let session: AuthSession = serde_json::from_str(r#"{
///     "access_token": "token",
///     "scope": "store_v2_products",
///     "user": { "id": 1, "username": "installer", "email": "installer@example.com" },
///     "owner": { "id": 2, "username": "owner", "email": "owner@example.com" },
///     "context": "stores/abc123"
/// }"#).unwrap();
///
/// let store = Store::from_auth_session(&session).unwrap();
/// assert_eq!(store.hash.as_str(), "abc123");
/// assert_eq!(store.installer_user_id, 1);
/// assert_eq!(store.owner_id, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// The store hash.
    pub hash: StoreHash,

    /// OAuth access token issued for this installation.
    pub access_token: String,

    /// Granted OAuth scopes.
    pub scope: String,

    /// User ID of the installer.
    pub installer_user_id: u64,

    /// Email address of the installer.
    pub installer_email: String,

    /// User ID of the store owner.
    pub owner_id: u64,

    /// Email address of the store owner.
    pub owner_email: String,
}

impl Store {
    /// Maps an install session to a store.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStoreContextError`] if the session's `context` is not
    /// a valid `"stores/{hash}"` string.
    pub fn from_auth_session(session: &AuthSession) -> Result<Self, InvalidStoreContextError> {
        Ok(Self {
            hash: session.store_hash()?,
            access_token: session.access_token.clone(),
            scope: session.scope.clone(),
            installer_user_id: session.user.id,
            installer_email: session.user.email.clone(),
            owner_id: session.owner.id,
            owner_email: session.owner.email.clone(),
        })
    }
}

/// Persistence for store installations.
///
/// Both operations must be idempotent.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Creates the store or updates it in place, keyed by hash.
    ///
    /// A reinstall must refresh the token, scope, and owner fields.
    async fn upsert_store(&self, store: &Store) -> Result<(), BoxError>;

    /// Marks the store as inactive.
    async fn deactivate_store(&self, hash: &StoreHash) -> Result<(), BoxError>;
}

/// Persistence for store users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Removes or inactivates a user's access to one store. Must be idempotent.
    async fn remove_user(&self, user_id: u64, hash: &StoreHash) -> Result<(), BoxError>;
}

#[async_trait]
impl<T: StoreRepository + ?Sized> StoreRepository for Arc<T> {
    async fn upsert_store(&self, store: &Store) -> Result<(), BoxError> {
        (**self).upsert_store(store).await
    }

    async fn deactivate_store(&self, hash: &StoreHash) -> Result<(), BoxError> {
        (**self).deactivate_store(hash).await
    }
}

#[async_trait]
impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    async fn remove_user(&self, user_id: u64, hash: &StoreHash) -> Result<(), BoxError> {
        (**self).remove_user(user_id, hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionUser;

    fn session(context: &str) -> AuthSession {
        AuthSession {
            access_token: "access_token_value".to_string(),
            scope: "products_read categories_read".to_string(),
            user: SessionUser {
                id: 101,
                username: "installer".to_string(),
                email: "installer@store.com".to_string(),
            },
            owner: SessionUser {
                id: 202,
                username: "owner".to_string(),
                email: "owner@store.com".to_string(),
            },
            context: context.to_string(),
            ajs_anonymous_id: None,
            account_uuid: Some("uuid".to_string()),
        }
    }

    #[test]
    fn test_from_auth_session_maps_every_field() {
        let store = Store::from_auth_session(&session("stores/abc123")).unwrap();

        assert_eq!(store.hash, StoreHash::new("abc123").unwrap());
        assert_eq!(store.access_token, "access_token_value");
        assert_eq!(store.scope, "products_read categories_read");
        assert_eq!(store.installer_user_id, 101);
        assert_eq!(store.installer_email, "installer@store.com");
        assert_eq!(store.owner_id, 202);
        assert_eq!(store.owner_email, "owner@store.com");
    }

    #[test]
    fn test_from_auth_session_rejects_bad_context() {
        let error = Store::from_auth_session(&session("abc123")).unwrap_err();
        assert_eq!(error.context, "sub: abc123");
    }
}

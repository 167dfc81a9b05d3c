//! The result of an OAuth authorization code exchange.

use crate::error::InvalidStoreContextError;
use crate::store::StoreHash;
use serde::{Deserialize, Serialize};

/// A BigCommerce user as described by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// The BigCommerce user ID.
    pub id: u64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,
}

/// Session returned by the BigCommerce token endpoint after an install.
///
/// The field names mirror the provider's JSON response so the session can be
/// deserialized, stored, or forwarded as-is. This crate performs no
/// validation of its content beyond what deserialization requires.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::AuthSession;
///
/// let session: AuthSession = serde_json::from_str(r#"{
///     "access_token": "token",
///     "scope": "store_v2_products",
///     "user": { "id": 1, "username": "installer", "email": "installer@example.com" },
///     "owner": { "id": 2, "username": "owner", "email": "owner@example.com" },
///     "context": "stores/abc123",
///     "account_uuid": "6c4f0a3e-4b1f-4d43-9f55-0d0a3b1a1f00"
/// }"#).unwrap();
///
/// assert_eq!(session.store_hash().unwrap().as_str(), "abc123");
/// assert!(session.ajs_anonymous_id.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token for the store's API.
    pub access_token: String,

    /// Space-separated list of granted scopes.
    pub scope: String,

    /// The user who installed the app.
    pub user: SessionUser,

    /// The store owner.
    pub owner: SessionUser,

    /// The store context, `"stores/{hash}"`.
    pub context: String,

    /// Anonymous analytics identifier, when present.
    #[serde(default)]
    pub ajs_anonymous_id: Option<String>,

    /// BigCommerce account UUID, when present.
    #[serde(default)]
    pub account_uuid: Option<String>,
}

impl AuthSession {
    /// Parses the store hash out of the session's `context`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStoreContextError`] if `context` is not a valid
    /// `"stores/{hash}"` string.
    pub fn store_hash(&self) -> Result<StoreHash, InvalidStoreContextError> {
        StoreHash::from_context_subject(&self.context)
    }
}

// Verify AuthSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthSession>();
};

//! Claims carried by a BigCommerce `signed_payload_jwt`.

use crate::error::InvalidStoreContextError;
use crate::store::StoreHash;
use serde::{Deserialize, Serialize};

/// The user who triggered the callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsUser {
    /// The BigCommerce user ID.
    pub id: u64,

    /// The user's email address.
    pub email: String,

    /// The user's locale (e.g., `en-US`).
    pub locale: String,
}

/// The owner of the store the callback concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsOwner {
    /// The BigCommerce user ID of the owner.
    pub id: u64,

    /// The owner's email address.
    pub email: String,
}

/// Decoded body of a verified signed payload token.
///
/// Values of this type are produced by a
/// [`SignedPayloadVerifier`](crate::auth::signed_payload::SignedPayloadVerifier)
/// only after the signature and lifetime checks have passed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPayloadClaims {
    /// Audience, the app's client ID.
    pub aud: String,

    /// Issuer marker, `"bc"` for BigCommerce.
    pub iss: String,

    /// Issued-at time, Unix seconds.
    pub iat: i64,

    /// Not-before time, Unix seconds.
    pub nbf: i64,

    /// Expiry time, Unix seconds (exclusive).
    pub exp: i64,

    /// Unique token ID.
    pub jti: String,

    /// Store context, `"stores/{hash}"`.
    pub sub: String,

    /// Deep-link path requested when the app was loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Channel the app was loaded for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<u64>,

    /// The acting user.
    pub user: ClaimsUser,

    /// The store owner.
    pub owner: ClaimsOwner,
}

impl SignedPayloadClaims {
    /// Issuer value BigCommerce puts in `iss`.
    pub const ISSUER: &'static str = "bc";

    /// Parses the store hash out of the `sub` claim.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStoreContextError`] if `sub` is not a valid
    /// `"stores/{hash}"` string.
    pub fn store_hash(&self) -> Result<StoreHash, InvalidStoreContextError> {
        StoreHash::from_context_subject(&self.sub)
    }

    /// Returns `true` if the acting user is the store owner.
    #[must_use]
    pub const fn is_owner(&self) -> bool {
        self.user.id == self.owner.id
    }
}

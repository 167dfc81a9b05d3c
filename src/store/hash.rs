//! The validated store hash value object.

use crate::error::InvalidStoreContextError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a BigCommerce store installation.
///
/// A `StoreHash` can only be obtained through one of its constructors, so a
/// value in hand always satisfies the constructor's validation.
///
/// # Constructors
///
/// - [`StoreHash::new`] accepts an already isolated hash and only checks that
///   its length is within `3..=64`. Use it for hashes that come from a trusted
///   source, such as your own database.
/// - [`StoreHash::from_context_subject`] parses a `"stores/{hash}"` context
///   (the OAuth `context` field or a signed payload `sub` claim) and also
///   restricts the hash to `[A-Za-z0-9_-]`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::StoreHash;
///
/// let from_sub = StoreHash::from_context_subject("stores/abc123").unwrap();
/// let raw = StoreHash::new("abc123").unwrap();
///
/// assert_eq!(from_sub, raw);
/// assert_eq!(from_sub.to_string(), "abc123");
/// assert!(StoreHash::from_context_subject("abc123").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreHash(String);

impl StoreHash {
    /// Prefix of a store context string.
    pub const CONTEXT_PREFIX: &'static str = "stores/";

    const MIN_LEN: usize = 3;
    const MAX_LEN: usize = 64;

    /// Creates a store hash from a raw, already isolated hash string.
    ///
    /// Only the length is validated; the character set is not. Length is
    /// counted in UTF-16 code units, so `"a\u{1F600}"` has length 3.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStoreContextError`] if the hash is empty or its
    /// length is outside `3..=64`.
    pub fn new(hash: impl Into<String>) -> Result<Self, InvalidStoreContextError> {
        let hash = hash.into();
        if !Self::has_valid_length(&hash) {
            return Err(InvalidStoreContextError::new(format!("hash: {hash}")));
        }
        Ok(Self(hash))
    }

    /// Creates a store hash from a `"stores/{hash}"` context string.
    ///
    /// The whole string must match `stores/` followed by 3 to 64 characters
    /// from `[A-Za-z0-9_-]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStoreContextError`] when the prefix is missing, the
    /// hash is empty or out of range, or it contains a disallowed character.
    pub fn from_context_subject(sub: &str) -> Result<Self, InvalidStoreContextError> {
        sub.strip_prefix(Self::CONTEXT_PREFIX)
            .filter(|hash| Self::has_valid_length(hash) && hash.chars().all(Self::is_hash_char))
            .map(|hash| Self(hash.to_string()))
            .ok_or_else(|| InvalidStoreContextError::new(format!("sub: {sub}")))
    }

    /// Returns the raw hash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `"stores/{hash}"` context string for this store.
    #[must_use]
    pub fn to_context(&self) -> String {
        format!("{}{}", Self::CONTEXT_PREFIX, self.0)
    }

    fn has_valid_length(hash: &str) -> bool {
        (Self::MIN_LEN..=Self::MAX_LEN).contains(&hash.encode_utf16().count())
    }

    const fn is_hash_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    }
}

impl fmt::Display for StoreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses a raw hash, the inverse of `Display`.
///
/// Use [`StoreHash::from_context_subject`] for `"stores/{hash}"` strings.
impl FromStr for StoreHash {
    type Err = InvalidStoreContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for StoreHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_length_bounds() {
        assert_eq!(StoreHash::new("abc").unwrap().as_str(), "abc");
        let longest = "a".repeat(64);
        assert_eq!(StoreHash::new(longest.clone()).unwrap().to_string(), longest);
    }

    #[test]
    fn test_new_rejects_empty_and_out_of_range() {
        assert!(StoreHash::new("").is_err());
        assert!(StoreHash::new("ab").is_err());
        assert!(StoreHash::new("a".repeat(65)).is_err());
    }

    #[test]
    fn test_new_only_checks_length() {
        // The raw constructor trusts its caller with the character set
        let hash = StoreHash::new("abc/def!").unwrap();
        assert_eq!(hash.as_str(), "abc/def!");
    }

    #[test]
    fn test_new_error_carries_input() {
        let error = StoreHash::new("ab").unwrap_err();
        assert_eq!(error.context, "hash: ab");
    }

    #[test]
    fn test_from_context_subject_extracts_hash() {
        let hash = StoreHash::from_context_subject("stores/abc_DEF-123").unwrap();
        assert_eq!(hash.as_str(), "abc_DEF-123");
        assert_eq!(hash.to_context(), "stores/abc_DEF-123");
    }

    #[test]
    fn test_from_context_subject_rejects_invalid_subjects() {
        for sub in [
            "",
            "abc123",
            "stores/",
            "stores/ab",
            "stores/abc/def",
            "stores/abc def",
            "stores/abc.def",
            "stores/ábc",
            "Stores/abc123",
            " stores/abc123",
            "stores/abc123\n",
            "shops/stores/abc123",
        ] {
            let result = StoreHash::from_context_subject(sub);
            assert!(result.is_err(), "expected {sub:?} to be rejected");
        }

        let too_long = format!("stores/{}", "a".repeat(65));
        assert!(StoreHash::from_context_subject(&too_long).is_err());
    }

    #[test]
    fn test_from_context_subject_error_carries_input() {
        let error = StoreHash::from_context_subject("shops/abc").unwrap_err();
        assert_eq!(error.context, "sub: shops/abc");
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = StoreHash::new("abc123").unwrap();
        let b = StoreHash::from_context_subject("stores/abc123").unwrap();
        let c = StoreHash::new("xyz789").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_length_counts_utf16_code_units() {
        // One astral character is two UTF-16 code units
        let hash = StoreHash::new("a\u{1F600}").unwrap();
        assert_eq!(hash.as_str(), "a\u{1F600}");
        assert!(StoreHash::new("\u{1F600}").is_err());
        assert!(StoreHash::new("\u{1F600}".repeat(33)).is_err());
        assert!(StoreHash::new("\u{1F600}".repeat(32)).is_ok());
    }

    #[test]
    fn test_display_and_from_str_round_trip() {
        for raw in ["abc", "abc123", "abc_DEF-123"] {
            let hash = StoreHash::new(raw).unwrap();
            let parsed: StoreHash = hash.to_string().parse().unwrap();
            assert_eq!(parsed, hash);
        }

        let from_context = StoreHash::from_context_subject("stores/z4zn3wo").unwrap();
        assert_eq!(
            from_context.to_string().parse::<StoreHash>().unwrap(),
            from_context
        );
        assert!("ab".parse::<StoreHash>().is_err());
    }

    #[test]
    fn test_from_str_and_serde_agree() {
        let parsed: StoreHash = "abc123".parse().unwrap();
        let deserialized: StoreHash = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(parsed, deserialized);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""abc123""#);
    }

    #[test]
    fn test_serde_uses_raw_hash() {
        let hash = StoreHash::new("abc123").unwrap();
        assert_eq!(serde_json::to_string(&hash).unwrap(), r#""abc123""#);

        let restored: StoreHash = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(restored, hash);
        assert!(serde_json::from_str::<StoreHash>(r#""ab""#).is_err());
    }
}

//! Per-invocation context passed alongside use case inputs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Open key/value bag handed to a use case and every decorator around it.
///
/// Callers put request-scoped data here (a request ID, the locale the
/// merchant is browsing in, a tenant key) so decorators can read it without
/// the input types growing fields that the base use cases never look at.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::use_cases::ExecutionContext;
///
/// let context = ExecutionContext::new()
///     .with("request_id", "req-42")
///     .with("attempt", 2);
///
/// assert_eq!(context.get_as::<String>("request_id").as_deref(), Some("req-42"));
/// assert_eq!(context.get_as::<u32>("attempt"), Some(2));
/// assert!(context.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionContext {
    values: HashMap<String, Value>,
}

impl ExecutionContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the value under `key` deserialized as `T`.
    ///
    /// Returns `None` when the key is absent or the value has another shape.
    #[must_use]
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
    }

    /// Returns `true` if a value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the context holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Context for the install flow.
pub type InstallAppContext = ExecutionContext;

/// Context for the load flow.
pub type LoadAppContext = ExecutionContext;

/// Context for the uninstall flow.
pub type UninstallAppContext = ExecutionContext;

/// Context for the remove-user flow.
pub type RemoveUserContext = ExecutionContext;

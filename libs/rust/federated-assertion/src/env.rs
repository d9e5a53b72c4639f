//! Environment variable lookup.
//!
//! The provider consults the environment on every retrieval, so the lookup
//! sits behind a trait: production code reads the process environment, while
//! tests and embedders can hand in a [`MapEnvironment`] and change it after the
//! provider has been built.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};

/// Source of environment variables.
pub trait Environment: Send + Sync + Debug {
    /// Current value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values cannot name a path we would read as text anyway.
        std::env::var(key).ok()
    }
}

/// In-memory environment shared between clones.
///
/// Cloning yields a handle to the same map, so a test can keep one clone,
/// give another to a provider, and mutate variables in between calls.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: Arc<RwLock<HashMap<String, String>>>,
}

impl MapEnvironment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Remove `key`.
    pub fn remove(&self, key: &str) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }
}

impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

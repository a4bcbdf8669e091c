//! Preference Storage
//!
//! Key-value port used to persist the expand/collapse preference.
//! The browser implementation lives in `dom`; `MemoryStore` backs tests
//! and pages where local storage is disabled.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Storage access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key-value store with fallible access
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Read the "expanded" preference.
///
/// Only the exact text `"true"` counts as expanded. A missing key or a
/// failed read yields `false`.
pub fn read_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> bool {
    match store.get(key) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            log::debug!("preference read failed for {key}: {e}");
            false
        }
    }
}

/// Persist the "expanded" preference, ignoring failures
pub fn write_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str, expanded: bool) {
    let value = if expanded { "true" } else { "false" };
    if let Err(e) = store.set(key, value) {
        log::debug!("preference write failed for {key}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_read_preference_only_accepts_true() {
        assert!(read_preference(&MemoryStore::with_entry("k", "true"), "k"));
        assert!(!read_preference(&MemoryStore::with_entry("k", "false"), "k"));
        assert!(!read_preference(&MemoryStore::with_entry("k", "TRUE"), "k"));
        assert!(!read_preference(&MemoryStore::with_entry("k", "1"), "k"));
        assert!(!read_preference(&MemoryStore::new(), "k"));
    }

    #[test]
    fn test_read_preference_falls_back_on_error() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StorageError::Unavailable));

        assert!(!read_preference(&store, "k"));
    }

    #[test]
    fn test_write_preference_swallows_error() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_set()
            .withf(|key, value| key == "k" && value == "true")
            .times(1)
            .returning(|_, _| Err(StorageError::Write("quota exceeded".to_string())));

        write_preference(&store, "k", true);
    }
}

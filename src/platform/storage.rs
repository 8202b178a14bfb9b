//! Storage trait and the in-memory backend

use std::collections::HashMap;

use crate::error::StoreError;

/// Durable string key-value store
///
/// The roller reads once at startup and writes after every mutation.
pub trait Store {
    /// Stored value for `key`, or `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Non-durable store backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

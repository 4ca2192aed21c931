//! Key/value storage media for parkreg.
//!
//! A storage medium holds whole text values under string keys, with no
//! partial-update primitive. The record store layers its mapping on top of a
//! single key. Two media are provided: [`SqliteStorage`] for durable storage
//! in a database file, and [`MemoryStorage`] for tests and throwaway sessions.

pub mod schema;
mod sqlite;

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Error, Result};

pub use sqlite::{SqliteStorage, StorageStats};

/// A whole-value key/value text store.
///
/// Implementations must leave the previous value untouched when a write fails.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QuotaExceeded`] if the value is larger than the
    /// medium's quota, or another error if the medium cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Reject a value that would not fit in `quota` bytes.
pub(crate) fn check_quota(key: &str, value: &str, quota: Option<usize>) -> Result<()> {
    match quota {
        Some(quota) if value.len() > quota => Err(Error::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            quota,
        }),
        _ => Ok(()),
    }
}

/// In-memory storage medium.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty, unlimited in-memory medium.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty in-memory medium that rejects values over `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the medium holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        check_quota(key, value, self.quota)?;
        trace!("Setting {} bytes under '{}'", value.len(), key);
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

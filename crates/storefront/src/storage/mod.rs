//! Persistence boundary.
//!
//! Storage is a synchronous, string-valued key-value store with the same
//! contract as browser `localStorage`: the only channel through which state
//! crosses page loads.
//!
//! # Keys
//!
//! - `<prefix>Cart` - JSON array of cart lines
//! - `<prefix>LoggedIn` - the literal `"true"` when logged in
//! - `<prefix>DeliveryLocation` - JSON `{region, city, barangay}` object
//!
//! # Implementations
//!
//! - [`MemoryStorage`] - in-process map, used by tests and embedders
//! - [`FileStorage`] - JSON file on disk, used by the command-line storefront
//!
//! Two pages writing the same storage race with no reconciliation: the last
//! write wins.

mod file;
mod memory;

use std::collections::HashMap;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Default storage quota, matching the common browser `localStorage` limit.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Default key prefix.
pub const DEFAULT_KEY_PREFIX: &str = "artsInTheOven";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The write would exceed the storage quota.
    #[error("storage quota exceeded writing {key} ({needed} bytes needed, quota {quota})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// Underlying file operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be encoded or decoded.
    #[error("storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A synchronous string key-value store.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write is rejected.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage keys for storefront state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key for the serialized cart.
    pub cart: String,
    /// Key for the login flag.
    pub logged_in: String,
    /// Key for the saved delivery location.
    pub delivery_location: String,
}

impl StorageKeys {
    /// Build keys sharing a common prefix.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            cart: format!("{prefix}Cart"),
            logged_in: format!("{prefix}LoggedIn"),
            delivery_location: format!("{prefix}DeliveryLocation"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }
}

/// Check that `entries` with `key` set to `value` fits in `quota` bytes.
fn check_quota(
    entries: &HashMap<String, String>,
    key: &str,
    value: &str,
    quota: usize,
) -> Result<(), StorageError> {
    let others: usize = entries
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();
    let needed = others + key.len() + value.len();

    if needed > quota {
        return Err(StorageError::QuotaExceeded {
            key: key.to_owned(),
            needed,
            quota,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.cart, "artsInTheOvenCart");
        assert_eq!(keys.logged_in, "artsInTheOvenLoggedIn");
        assert_eq!(keys.delivery_location, "artsInTheOvenDeliveryLocation");
    }

    #[test]
    fn test_check_quota_ignores_replaced_value() {
        let mut entries = HashMap::new();
        entries.insert("k".to_string(), "x".repeat(8));

        // Replacing "k" only counts the new value.
        assert!(check_quota(&entries, "k", "yyyy", 5).is_ok());
        assert!(matches!(
            check_quota(&entries, "other", "y", 10),
            Err(StorageError::QuotaExceeded { needed: 15, .. })
        ));
    }
}

//! Persisted delivery location.

use tracing::warn;

use oven_core::DeliveryLocation;

use crate::storage::{Storage, StorageError};

/// Reads and writes the saved delivery location.
pub struct LocationStore<'a> {
    storage: &'a dyn Storage,
    key: &'a str,
}

impl<'a> LocationStore<'a> {
    #[must_use]
    pub const fn new(storage: &'a dyn Storage, key: &'a str) -> Self {
        Self { storage, key }
    }

    /// The saved location, if any.
    ///
    /// Unreadable or malformed records are treated as absent.
    #[must_use]
    pub fn load(&self) -> Option<DeliveryLocation> {
        let raw = match self.storage.get_item(self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read delivery location");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(location) => Some(location),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ignoring malformed delivery location");
                None
            }
        }
    }

    /// Save `location`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write is rejected.
    pub fn save(&self, location: &DeliveryLocation) -> Result<(), StorageError> {
        let json = serde_json::to_string(location)?;
        self.storage.set_item(self.key, &json)
    }

    /// Delete the saved location.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record could not be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(self.key)
    }
}

//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_STORAGE_PATH` - File backing the storage (default: oven-storage.json)
//! - `STOREFRONT_STORAGE_QUOTA_BYTES` - Storage quota in bytes (default: 5242880)
//! - `STOREFRONT_KEY_PREFIX` - Prefix for storage keys (default: artsInTheOven)
//! - `STOREFRONT_MIN_PASSWORD_LENGTH` - Minimum login password length (default: 4)
//! - `STOREFRONT_STORE_NAME` - Store name used in notices (default: Arts in the Oven)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::services::auth::DEFAULT_MIN_PASSWORD_LENGTH;
use crate::storage::{DEFAULT_KEY_PREFIX, DEFAULT_QUOTA_BYTES, FileStorage, StorageKeys};

const DEFAULT_STORAGE_PATH: &str = "oven-storage.json";
const DEFAULT_STORE_NAME: &str = "Arts in the Oven";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// File backing the storage for the command-line storefront
    pub storage_path: PathBuf,
    /// Maximum bytes the storage accepts
    pub storage_quota: usize,
    /// Storage keys derived from the configured prefix
    pub keys: StorageKeys,
    /// Minimum accepted login password length
    pub min_password_length: usize,
    /// Store name shown in notices
    pub store_name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_quota: DEFAULT_QUOTA_BYTES,
            keys: StorageKeys::default(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path = PathBuf::from(get_env_or_default(
            "STOREFRONT_STORAGE_PATH",
            DEFAULT_STORAGE_PATH,
        ));
        let storage_quota = parse_env("STOREFRONT_STORAGE_QUOTA_BYTES", DEFAULT_QUOTA_BYTES)?;
        let prefix = get_env_or_default("STOREFRONT_KEY_PREFIX", DEFAULT_KEY_PREFIX);
        if prefix.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_KEY_PREFIX".to_string(),
                "must not be empty".to_string(),
            ));
        }
        let min_password_length = parse_env(
            "STOREFRONT_MIN_PASSWORD_LENGTH",
            DEFAULT_MIN_PASSWORD_LENGTH,
        )?;
        let store_name = get_env_or_default("STOREFRONT_STORE_NAME", DEFAULT_STORE_NAME);

        Ok(Self {
            storage_path,
            storage_quota,
            keys: StorageKeys::with_prefix(&prefix),
            min_password_length,
            store_name,
        })
    }

    /// File storage at the configured path and quota.
    #[must_use]
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::with_quota(&self.storage_path, self.storage_quota)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an optional environment variable, falling back to `default`.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

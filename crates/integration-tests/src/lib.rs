//! Integration tests for the Arts in the Oven storefront.
//!
//! Each test drives several page loads against one storage file, the way a
//! shopper moves between `products.html`, `login.html` and `location.html`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p oven-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart survives page loads; corrupt state recovers
//! - `checkout_flow` - Empty-cart gate, location, finalization
//! - `session_flag` - Login and logout across pages

use std::path::Path;

use tempfile::TempDir;

use oven_core::{Catalog, ProductId};
use oven_storefront::PageState;
use oven_storefront::config::StorefrontConfig;
use oven_storefront::storage::{FileStorage, Storage};

/// A storefront backed by a storage file in a temporary directory.
///
/// Every call to [`TestShop::page`] is a fresh page load.
#[derive(Debug)]
pub struct TestShop {
    pub config: StorefrontConfig,
    pub catalog: Catalog,
    _dir: TempDir,
}

impl TestShop {
    /// Create a shop with default keys and an empty storage file.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = StorefrontConfig {
            storage_path: dir.path().join("oven-storage.json"),
            ..StorefrontConfig::default()
        };
        Self {
            config,
            catalog: Catalog::arts_in_the_oven(),
            _dir: dir,
        }
    }

    /// Storage file path.
    #[must_use]
    pub fn storage_path(&self) -> &Path {
        &self.config.storage_path
    }

    /// A new handle on the storage file, as a new process would open it.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        self.config.file_storage()
    }

    /// Load a page against `storage`.
    pub fn page<'a>(&'a self, storage: &'a dyn Storage) -> PageState<'a> {
        PageState::load(&self.config, &self.catalog, storage)
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a product id from the menu.
///
/// # Panics
///
/// Panics if `raw` is not a valid id.
#[must_use]
pub fn product(raw: &str) -> ProductId {
    ProductId::parse(raw).expect("invalid product id")
}

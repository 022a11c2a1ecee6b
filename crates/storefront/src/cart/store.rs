//! The cart store: owner of the page's cart and its persistence.

use tracing::{debug, warn};

use oven_core::{Catalog, Price, ProductId};

use super::{Cart, CartError, CartLine};
use crate::storage::Storage;

/// Owns the cart for one page load.
///
/// A store is created by [`CartStore::open`], which rehydrates the cart from
/// storage. Every mutation writes the new cart back before returning.
///
/// Persistence is best-effort: if storage rejects a write the failure is
/// logged and the in-memory cart remains authoritative for the rest of the
/// page.
pub struct CartStore<'a> {
    storage: &'a dyn Storage,
    catalog: &'a Catalog,
    key: String,
    cart: Cart,
}

impl<'a> CartStore<'a> {
    /// Create a store for `key` and load the persisted cart.
    pub fn open(storage: &'a dyn Storage, catalog: &'a Catalog, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            catalog,
            key: key.into(),
            cart: Cart::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory cart with the persisted one.
    ///
    /// Missing or malformed data yields an empty cart; this never fails.
    pub fn load(&mut self) -> &Cart {
        self.cart = match self.read_persisted() {
            Ok(cart) => cart,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable persisted cart");
                Cart::new()
            }
        };
        debug!(key = %self.key, lines = self.cart.len(), "Cart loaded");
        &self.cart
    }

    /// Decode the persisted cart without touching the in-memory one.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if storage cannot be read, or
    /// `CartError::MalformedPersistedState` if the stored value does not decode.
    pub fn read_persisted(&self) -> Result<Cart, CartError> {
        match self.storage.get_item(&self.key)? {
            None => Ok(Cart::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(CartError::MalformedPersistedState),
        }
    }

    /// Add one unit of the product with `id`.
    ///
    /// Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownProduct` if `id` is not in the catalog, or
    /// `CartError::QuantityOverflow` if the line is at its limit. The cart is
    /// unchanged and nothing is persisted in either case.
    pub fn add(&mut self, id: &ProductId) -> Result<u32, CartError> {
        let product = self
            .catalog
            .lookup(id)
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;

        let quantity = self.cart.add_product(product)?;
        debug!(product_id = %id, quantity = quantity.get(), "Added to cart");

        self.persist();
        Ok(quantity.get())
    }

    /// Delete the line for `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLine> {
        let removed = self.cart.remove(id);
        debug!(product_id = %id, removed = removed.is_some(), "Removed from cart");

        self.persist();
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("Cart cleared");

        self.persist();
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of `price × quantity`.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Sum of quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Write the cart to storage, logging rather than returning failures.
    pub fn persist(&self) {
        let json = match serde_json::to_string(&self.cart) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.set_item(&self.key, &json) {
            warn!(key = %self.key, error = %e, "Failed to persist cart");
        }
    }
}

impl std::fmt::Debug for CartStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageKeys};

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn key() -> String {
        StorageKeys::default().cart
    }

    #[test]
    fn test_add_remove_scenario() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        let mut store = CartStore::open(&storage, &catalog, key());

        assert_eq!(store.add(&id("cvc")).unwrap(), 1);
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.total(), Price::whole(45));

        assert_eq!(store.add(&id("cvc")).unwrap(), 2);
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.total(), Price::whole(90));

        store.remove(&id("cvc"));
        assert!(store.is_empty());
        assert_eq!(store.total(), Price::ZERO);
    }

    #[test]
    fn test_unknown_product_changes_nothing() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        let mut store = CartStore::open(&storage, &catalog, key());
        store.add(&id("cvc")).unwrap();
        let before = storage.get_item(&key()).unwrap();

        let err = store.add(&id("missing")).unwrap_err();
        assert!(matches!(err, CartError::UnknownProduct(ref p) if p.as_str() == "missing"));
        assert_eq!(store.item_count(), 1);
        assert_eq!(storage.get_item(&key()).unwrap(), before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        let mut store = CartStore::open(&storage, &catalog, key());
        store.add(&id("ccc")).unwrap();

        assert!(store.remove(&id("cvc")).is_none());
        assert_eq!(store.item_count(), 1);
    }

    #[test]
    fn test_every_mutation_persists() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        let mut store = CartStore::open(&storage, &catalog, key());

        store.add(&id("cvc")).unwrap();
        assert!(storage.get_item(&key()).unwrap().unwrap().contains("cvc"));

        store.clear();
        assert_eq!(storage.get_item(&key()).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.item_count(), 0);
        assert!(store.is_empty());

        let reopened = CartStore::open(&storage, &catalog, key());
        assert_eq!(reopened.item_count(), 0);
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_round_trip_through_fresh_store() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        let mut store = CartStore::open(&storage, &catalog, key());
        store.add(&id("pbb")).unwrap();
        store.add(&id("cvc")).unwrap();
        store.add(&id("pbb")).unwrap();

        let reopened = CartStore::open(&storage, &catalog, key());
        assert_eq!(reopened.cart(), store.cart());
    }

    #[test]
    fn test_malformed_state_loads_empty() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        storage.set_item(&key(), "{not json").unwrap();

        let store = CartStore::open(&storage, &catalog, key());
        assert!(store.is_empty());
        assert!(matches!(
            store.read_persisted(),
            Err(CartError::MalformedPersistedState(_))
        ));
    }

    #[test]
    fn test_null_state_loads_empty() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        storage.set_item(&key(), "null").unwrap();

        assert!(CartStore::open(&storage, &catalog, key()).is_empty());
    }

    #[test]
    fn test_write_failure_keeps_in_memory_cart() {
        let storage = MemoryStorage::with_quota(8);
        let catalog = Catalog::arts_in_the_oven();
        let mut store = CartStore::open(&storage, &catalog, key());

        assert_eq!(store.add(&id("cvc")).unwrap(), 1);
        assert_eq!(store.item_count(), 1);
        assert!(storage.get_item(&key()).unwrap().is_none());
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::arts_in_the_oven();
        let mut store = CartStore::open(&storage, &catalog, key());

        let ops: &[(&str, bool)] = &[
            ("cvc", true),
            ("pst", true),
            ("cvc", true),
            ("pst", false),
            ("ccc", true),
            ("nope", false),
            ("cmc", true),
        ];
        for &(product, add) in ops {
            if add {
                store.add(&id(product)).unwrap();
            } else {
                store.remove(&id(product));
            }
            let expected: Price = store
                .cart()
                .lines()
                .iter()
                .map(|line| line.price.times(line.quantity.get()))
                .sum();
            assert_eq!(store.total(), expected);
        }
        assert_eq!(store.total(), Price::whole(45 * 2 + 60 + 60));
    }
}

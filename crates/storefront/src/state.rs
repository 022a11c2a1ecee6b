//! Per-page application state.

use oven_core::Catalog;

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::services::auth::AuthService;
use crate::services::checkout::CheckoutGate;
use crate::storage::Storage;
use crate::views::CartSummary;

/// State for a single page load.
///
/// Constructed once when a page loads (which rehydrates the cart) and passed
/// explicitly to every handler. Nothing is shared between pages except the
/// storage.
pub struct PageState<'a> {
    config: &'a StorefrontConfig,
    catalog: &'a Catalog,
    storage: &'a dyn Storage,
    cart: CartStore<'a>,
}

impl<'a> PageState<'a> {
    /// Load a page: open the cart store against `storage`.
    pub fn load(
        config: &'a StorefrontConfig,
        catalog: &'a Catalog,
        storage: &'a dyn Storage,
    ) -> Self {
        let cart = CartStore::open(storage, catalog, config.keys.cart.as_str());
        Self {
            config,
            catalog,
            storage,
            cart,
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        self.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// The page's cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<'a> {
        &self.cart
    }

    /// The page's cart store, for mutation.
    pub const fn cart_mut(&mut self) -> &mut CartStore<'a> {
        &mut self.cart
    }

    /// Login flag service.
    #[must_use]
    pub fn auth(&self) -> AuthService<'a> {
        let config = self.config;
        AuthService::new(
            self.storage,
            &config.keys.logged_in,
            config.min_password_length,
        )
    }

    /// Checkout gate.
    #[must_use]
    pub fn checkout(&self) -> CheckoutGate<'a> {
        let config = self.config;
        CheckoutGate::new(self.storage, &config.keys.delivery_location)
    }

    /// Summary of the current cart, rebuilt on every call.
    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        CartSummary::from(self.cart.cart())
    }
}

impl std::fmt::Debug for PageState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageState")
            .field("config", &self.config)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

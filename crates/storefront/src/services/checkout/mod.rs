//! Checkout gate.
//!
//! Checkout moves through three states:
//!
//! 1. cart has items, no location saved
//! 2. cart has items, location saved
//! 3. finalized: cart emptied and location removed
//!
//! An empty cart blocks both location capture and finalization.

mod error;
mod location;

pub use error::CheckoutError;
pub use location::LocationStore;

use tracing::info;

use oven_core::{DeliveryLocation, Price};

use crate::cart::{CartLine, CartStore};
use crate::storage::Storage;

/// Where the checkout flow currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStage {
    /// Nothing to check out; location and purchase controls are hidden.
    EmptyCart,
    /// Items present, waiting for a delivery location.
    NeedsLocation,
    /// Items and location present; the purchase can be finalized.
    ReadyToFinalize(DeliveryLocation),
}

/// What was bought, captured just before the cart was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseConfirmation {
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub item_count: u64,
    pub location: DeliveryLocation,
}

/// Enforces the non-empty-cart precondition and finalizes purchases.
pub struct CheckoutGate<'a> {
    locations: LocationStore<'a>,
}

impl<'a> CheckoutGate<'a> {
    /// Create a gate storing the location under `location_key`.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage, location_key: &'a str) -> Self {
        Self {
            locations: LocationStore::new(storage, location_key),
        }
    }

    /// Current checkout stage for `cart`.
    #[must_use]
    pub fn stage(&self, cart: &CartStore<'_>) -> CheckoutStage {
        if cart.is_empty() {
            return CheckoutStage::EmptyCart;
        }
        self.locations
            .load()
            .map_or(CheckoutStage::NeedsLocation, CheckoutStage::ReadyToFinalize)
    }

    /// Validate and save the delivery location.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart is empty (nothing is
    /// written), `CheckoutError::InvalidLocation` if a field is blank, or
    /// `CheckoutError::Storage` if the record could not be saved.
    pub fn save_location(
        &self,
        cart: &CartStore<'_>,
        region: &str,
        city: &str,
        barangay: &str,
    ) -> Result<DeliveryLocation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let location = DeliveryLocation::new(region, city, barangay)?;
        self.locations.save(&location)?;
        info!(region = %location.region, city = %location.city, "Delivery location saved");
        Ok(location)
    }

    /// Finalize the purchase: clear the cart and the saved location.
    ///
    /// The location is removed first; if that fails nothing has changed.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart`, `CheckoutError::MissingLocation`,
    /// or `CheckoutError::Storage` if the location could not be removed.
    pub fn finalize_purchase(
        &self,
        cart: &mut CartStore<'_>,
    ) -> Result<PurchaseConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let location = self.locations.load().ok_or(CheckoutError::MissingLocation)?;

        let confirmation = PurchaseConfirmation {
            lines: cart.cart().lines().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
            location,
        };

        self.locations.clear()?;
        cart.clear();

        info!(
            total = %confirmation.total,
            item_count = confirmation.item_count,
            "Purchase finalized"
        );
        Ok(confirmation)
    }
}

//! Cart handlers.
//!
//! The cart badge and modal appear on every page; these handlers back the
//! add-to-cart buttons on the menu and the remove buttons in the modal.

use tracing::instrument;

use oven_core::ProductId;

use super::Outcome;
use crate::error::Result;
use crate::state::PageState;
use crate::views::CartSummary;

/// Current cart for the badge and modal.
#[must_use]
pub fn show(state: &PageState<'_>) -> CartSummary {
    state.cart_summary()
}

/// Add one unit of a product.
///
/// # Errors
///
/// Returns `AppError::Cart` if the product is unknown; the cart is unchanged.
#[instrument(skip(state))]
pub fn add(state: &mut PageState<'_>, id: &ProductId) -> Result<Outcome> {
    state.cart_mut().add(id)?;
    Ok(Outcome::stay(state))
}

/// Remove a product's line. Removing an absent product is not an error.
#[instrument(skip(state))]
pub fn remove(state: &mut PageState<'_>, id: &ProductId) -> Outcome {
    state.cart_mut().remove(id);
    Outcome::stay(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oven_core::{Catalog, Price};

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_two_lines_summary() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let mut state = PageState::load(&config, &catalog, &storage);

        for raw in ["cvc", "cvc", "ccc"] {
            add(&mut state, &ProductId::parse(raw).unwrap()).unwrap();
        }

        let summary = show(&state);
        assert_eq!(summary.grand_total, Price::whole(150));
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.items.len(), 2);
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let mut state = PageState::load(&config, &catalog, &storage);

        let outcome = remove(&mut state, &ProductId::parse("cvc").unwrap());
        assert!(outcome.cart.is_empty);
    }
}

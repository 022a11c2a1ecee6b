//! Cart modal.

use std::io::Write;

use oven_core::ProductId;
use oven_storefront::PageState;
use oven_storefront::routes::{self, Action};

use super::{write_cart, write_outcome};
use crate::CliError;

pub fn show(state: &PageState<'_>, out: &mut impl Write) -> Result<(), CliError> {
    write_cart(out, &routes::cart::show(state))?;
    Ok(())
}

pub fn add(state: &mut PageState<'_>, id: &ProductId, out: &mut impl Write) -> Result<(), CliError> {
    let outcome = routes::dispatch(state, Action::AddToCart(id.clone()))?;
    write_outcome(out, &outcome)?;
    Ok(())
}

pub fn remove(
    state: &mut PageState<'_>,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let outcome = routes::dispatch(state, Action::RemoveFromCart(id.clone()))?;
    write_outcome(out, &outcome)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oven_core::Catalog;
    use oven_storefront::config::StorefrontConfig;
    use oven_storefront::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_add_then_show() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let mut state = PageState::load(&config, &catalog, &storage);

        let mut out = Vec::new();
        add(&mut state, &ProductId::parse("ccc").unwrap(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cart: 1 item(s), ₱60.00\n");

        // Next page load sees the same cart.
        let state = PageState::load(&config, &catalog, &storage);
        let mut out = Vec::new();
        show(&state, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Chocolate Chip Cookies (1)"));
    }

    #[test]
    fn test_add_unknown_fails() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let mut state = PageState::load(&config, &catalog, &storage);

        let err = add(&mut state, &ProductId::parse("nope").unwrap(), &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.user_message(), "Sorry, \"nope\" is not on the menu.");
    }
}

//! Location page.

use std::io::Write;

use oven_storefront::PageState;
use oven_storefront::routes::{self, Action};

use super::{write_cart, write_outcome};
use crate::CliError;

pub fn show(state: &PageState<'_>, out: &mut impl Write) -> Result<(), CliError> {
    let view = routes::checkout::show(state);

    if let Some(notice) = &view.notice {
        writeln!(out, "{notice}")?;
        return Ok(());
    }

    write_cart(out, &routes::cart::show(state))?;
    if let Some(location) = &view.saved_location {
        writeln!(
            out,
            "Deliver to: {}, {}, {}",
            location.barangay, location.city, location.region
        )?;
    }
    if view.show_location_form {
        writeln!(
            out,
            "Set a delivery location: oven-cli checkout location --region <REGION> --city <CITY> --barangay <BARANGAY>"
        )?;
    }
    if view.show_finalize_button {
        writeln!(out, "Finalize Purchase: oven-cli checkout finalize")?;
    }
    Ok(())
}

pub fn save_location(
    state: &mut PageState<'_>,
    region: &str,
    city: &str,
    barangay: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let action = Action::SaveLocation {
        region: region.to_owned(),
        city: city.to_owned(),
        barangay: barangay.to_owned(),
    };
    let outcome = routes::dispatch(state, action)?;
    write_outcome(out, &outcome)?;
    Ok(())
}

pub fn finalize(state: &mut PageState<'_>, out: &mut impl Write) -> Result<(), CliError> {
    let outcome = routes::dispatch(state, Action::FinalizePurchase)?;
    write_outcome(out, &outcome)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oven_core::{Catalog, ProductId};
    use oven_storefront::config::StorefrontConfig;
    use oven_storefront::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_empty_cart_notice_only() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let state = PageState::load(&config, &catalog, &storage);

        let mut out = Vec::new();
        show(&state, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your cart is empty! Please add items before checking out.\n"
        );
    }

    #[test]
    fn test_location_then_finalize() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let mut state = PageState::load(&config, &catalog, &storage);
        state
            .cart_mut()
            .add(&ProductId::parse("cvc").unwrap())
            .unwrap();

        save_location(&mut state, "NCR", "Pasig", "Kapitolyo", &mut Vec::<u8>::new()).unwrap();

        let mut out = Vec::new();
        show(&state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Deliver to: Kapitolyo, Pasig, NCR"));
        assert!(text.contains("Finalize Purchase"));

        let mut out = Vec::new();
        finalize(&mut state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Thank you for your purchase from Arts in the Oven!"));
        assert!(text.contains("-> index.html"));
        assert!(state.cart().is_empty());
    }
}

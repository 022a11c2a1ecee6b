//! Page rendering for the command line.

pub mod account;
pub mod cart;
pub mod checkout;
pub mod menu;

use std::io::{self, Write};

use oven_storefront::routes::{Navigation, Outcome};
use oven_storefront::views::CartSummary;

/// Render the cart modal.
pub fn write_cart(out: &mut impl Write, cart: &CartSummary) -> io::Result<()> {
    writeln!(out, "Cart ({})", cart.item_count)?;
    if cart.show_empty_message {
        writeln!(out, "  Your cart is empty.")?;
        return Ok(());
    }
    for item in &cart.items {
        writeln!(
            out,
            "  {:<40} {:>12}  [{}]",
            item.display_line, item.line_total_label, item.product_id
        )?;
    }
    writeln!(out, "  Total: {}", cart.grand_total_label)
}

/// Render the result of an action: notice, navigation, then the cart badge.
pub fn write_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    if let Some(notice) = &outcome.notice {
        writeln!(out, "{notice}")?;
    }
    if let Navigation::Redirect(page) = outcome.navigation {
        writeln!(out, "-> {}", page.path())?;
    }
    writeln!(
        out,
        "Cart: {} item(s), {}",
        outcome.cart.item_count, outcome.cart.grand_total_label
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oven_core::{Catalog, ProductId};
    use oven_storefront::cart::CartStore;
    use oven_storefront::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_write_cart_lines() {
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(&storage, &catalog, "cart");
        store.add(&ProductId::parse("cvc").unwrap()).unwrap();
        store.add(&ProductId::parse("cvc").unwrap()).unwrap();

        let mut out = Vec::new();
        write_cart(&mut out, &CartSummary::from(store.cart())).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Cart (2)"));
        assert!(text.contains("Red Velvet Cupcake (2)"));
        assert!(text.contains("Total: ₱90.00"));
    }

    #[test]
    fn test_write_empty_cart() {
        let mut out = Vec::new();
        write_cart(&mut out, &CartSummary::empty()).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Your cart is empty."));
    }
}

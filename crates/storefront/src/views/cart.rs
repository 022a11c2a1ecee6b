//! Cart summary for rendering.

use oven_core::Price;

use crate::cart::{Cart, CartLine};

/// One cart line ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: String,
    /// `"<name> (<quantity>)"`.
    pub display_line: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: Price,
    pub line_total_label: String,
    pub image: String,
}

/// Everything a page needs to draw the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub items: Vec<CartItemView>,
    pub grand_total: Price,
    pub grand_total_label: String,
    /// Sum of quantities, shown on the cart badge.
    pub item_count: u64,
    pub is_empty: bool,
    pub show_empty_message: bool,
    pub show_purchase_button: bool,
}

impl CartSummary {
    /// Summary of an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&Cart::new())
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        let grand_total = cart.total();
        let is_empty = cart.is_empty();
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            grand_total,
            grand_total_label: grand_total.display(),
            item_count: cart.item_count(),
            is_empty,
            show_empty_message: is_empty,
            show_purchase_button: !is_empty,
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let line_total = line.line_total();
        Self {
            product_id: line.id.to_string(),
            display_line: format!("{} ({})", line.name, line.quantity),
            quantity: line.quantity.get(),
            unit_price: line.price.display(),
            line_total,
            line_total_label: line_total.display(),
            image: line.image.clone(),
        }
    }
}

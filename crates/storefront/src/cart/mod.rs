//! Cart state.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s, one per product, in the
//! order products were first added. Each line carries a snapshot of the
//! product taken when it was added, so later catalog price changes do not
//! alter lines already in the cart.
//!
//! Totals are never stored; they are recomputed from the lines on every read.

mod error;
mod store;

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize, Serializer};

use oven_core::{Price, Product, ProductId};

pub use error::CartError;
pub use store::CartStore;

/// One product in the cart.
///
/// Serialized as `{id, name, price, category, image, quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    /// Unit price at the time the product was first added.
    pub price: Price,
    pub category: String,
    pub image: String,
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// A new line with quantity 1, snapshotting `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity.get())
    }
}

/// The ordered contents of a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of `price × quantity` over all lines; zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities (not distinct lines).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Add one unit of `product`, merging into an existing line.
    ///
    /// Returns the line's new quantity.
    pub(crate) fn add_product(&mut self, product: &Product) -> Result<NonZeroU32, CartError> {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or_else(|| CartError::QuantityOverflow(product.id.clone()))?;
            return Ok(line.quantity);
        }

        let line = CartLine::from_product(product);
        let quantity = line.quantity;
        self.lines.push(line);
        Ok(quantity)
    }

    /// Delete the line for `id`, returning it if it existed.
    pub(crate) fn remove(&mut self, id: &ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| &line.id == id)?;
        Some(self.lines.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CartError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        for (i, line) in lines.iter().enumerate() {
            if lines.iter().skip(i + 1).any(|other| other.id == line.id) {
                return Err(CartError::DuplicateLine(line.id.clone()));
            }
        }
        Ok(Self { lines })
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.lines.serialize(serializer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn product(id: &str, price: u32) -> Product {
        Product::new(
            ProductId::parse(id).unwrap(),
            format!("Product {id}"),
            Price::whole(price),
            "Cupcakes",
            format!("images/{id}.jpg"),
        )
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        let cvc = product("cvc", 45);

        assert_eq!(cart.add_product(&cvc).unwrap().get(), 1);
        assert_eq!(cart.add_product(&cvc).unwrap().get(), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::whole(90));
    }

    #[test]
    fn test_total_and_item_count() {
        let mut cart = Cart::new();
        let cvc = product("cvc", 45);
        let ccc = product("ccc", 60);
        cart.add_product(&cvc).unwrap();
        cart.add_product(&ccc).unwrap();
        cart.add_product(&cvc).unwrap();

        assert_eq!(cart.total(), Price::whole(150));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_insertion_order_is_first_add() {
        let mut cart = Cart::new();
        let a = product("a", 1);
        let b = product("b", 1);
        cart.add_product(&a).unwrap();
        cart.add_product(&b).unwrap();
        cart.add_product(&a).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        let cvc = product("cvc", 45);
        cart.add_product(&cvc).unwrap();
        cart.add_product(&cvc).unwrap();

        let removed = cart.remove(&cvc.id).unwrap();
        assert_eq!(removed.quantity.get(), 2);
        assert!(cart.is_empty());
        assert!(cart.remove(&cvc.id).is_none());
    }

    #[test]
    fn test_quantity_overflow_leaves_line_unchanged() {
        let cvc = product("cvc", 45);
        let mut line = CartLine::from_product(&cvc);
        line.quantity = NonZeroU32::MAX;
        let mut cart = Cart::try_from(vec![line]).unwrap();

        assert!(matches!(
            cart.add_product(&cvc),
            Err(CartError::QuantityOverflow(_))
        ));
        assert_eq!(cart.get(&cvc.id).unwrap().quantity, NonZeroU32::MAX);
    }

    #[test]
    fn test_line_snapshot_keeps_price_at_add_time() {
        let mut cart = Cart::new();
        cart.add_product(&product("cvc", 45)).unwrap();
        // Same id, new catalog price: the existing line keeps its price.
        cart.add_product(&product("cvc", 50)).unwrap();
        assert_eq!(cart.total(), Price::whole(90));
    }

    #[test]
    fn test_serialized_shape() {
        let mut cart = Cart::new();
        cart.add_product(&product("cvc", 45)).unwrap();

        let value = serde_json::to_value(&cart).unwrap();
        let line = &value.as_array().unwrap()[0];
        assert_eq!(line["id"], json!("cvc"));
        assert_eq!(line["name"], json!("Product cvc"));
        assert_eq!(line["category"], json!("Cupcakes"));
        assert_eq!(line["image"], json!("images/cvc.jpg"));
        assert_eq!(line["quantity"], json!(1));
        assert_eq!(line["price"].as_f64(), Some(45.0));
    }

    #[test]
    fn test_deserialize_accepts_stored_format() {
        let raw = r#"[{"id":"cvc","name":"Red Velvet Cupcake","price":45,"category":"Cupcakes","image":"images/red velvet.jpg","quantity":2}]"#;
        let cart: Cart = serde_json::from_str(raw).unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Price::whole(90));
    }

    #[test]
    fn test_deserialize_rejects_invalid_lines() {
        let zero_quantity =
            r#"[{"id":"a","name":"A","price":1,"category":"X","image":"","quantity":0}]"#;
        let negative_price =
            r#"[{"id":"a","name":"A","price":-1,"category":"X","image":"","quantity":1}]"#;
        let duplicate = r#"[
            {"id":"a","name":"A","price":1,"category":"X","image":"","quantity":1},
            {"id":"a","name":"A","price":1,"category":"X","image":"","quantity":1}
        ]"#;

        assert!(serde_json::from_str::<Cart>(zero_quantity).is_err());
        assert!(serde_json::from_str::<Cart>(negative_price).is_err());
        assert!(serde_json::from_str::<Cart>(duplicate).is_err());
    }
}

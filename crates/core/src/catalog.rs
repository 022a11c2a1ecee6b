//! The product catalog.
//!
//! The catalog is the single source of truth for product attributes. It is
//! built once at startup and never mutated; iteration order is declaration
//! order.

use indexmap::IndexMap;

use crate::types::{Price, Product, ProductId};

/// Errors that can occur when building a [`Catalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// The built-in menu: `(id, name, price, category, image)`.
const MENU: &[(&str, &str, u32, &str, &str)] = &[
    ("cvc", "Red Velvet Cupcake", 45, "Cupcakes", "images/red velvet.jpg"),
    ("cbc", "Brownie Cupcake", 45, "Cupcakes", "images/brownie cupcake.jpg"),
    ("cbb", "Classic Burnt Basque", 40, "Cupsize Cheesecakes", "images/basque cup - Copy.jpg"),
    ("cst", "Strawberry", 40, "Cupsize Cheesecakes", "images/strawberry cup.jpg"),
    ("cnt", "Nutella", 40, "Cupsize Cheesecakes", "images/nutella cup.jpg"),
    ("ccc", "Chocolate Chip Cookies", 60, "Cookies", "images/chocolate chips.jpg"),
    ("ckc", "Cookies and Cream Cookies", 60, "Cookies", "images/cookies cream cookie.jpg"),
    ("cmc", "Cookie Monster Cookies", 60, "Cookies", "images/cookie monster.jpg"),
    ("pbb", "Classic Burnt Basque (4-inch)", 190, "4-inch Pan Cheesecakes", "images/basque pan.jpg"),
    ("pst", "Strawberry (4-inch)", 210, "4-inch Pan Cheesecakes", "images/strawberry pan.jpg"),
    ("pnt", "Nutella (4-inch)", 210, "4-inch Pan Cheesecakes", "images/nutella pan.jpg"),
];

/// An immutable, ordered product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: IndexMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog from products in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::new();
        for product in products {
            if map.contains_key(&product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            map.insert(product.id.clone(), product);
        }
        Ok(Self { products: map })
    }

    /// The store's built-in menu.
    #[must_use]
    pub fn arts_in_the_oven() -> Self {
        let products = MENU
            .iter()
            .filter_map(|&(id, name, price, category, image)| {
                let id = ProductId::parse(id).ok()?;
                Some(Product::new(id, name, Price::whole(price), category, image))
            })
            .map(|product| (product.id.clone(), product))
            .collect();
        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// All products in declaration order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Product> {
        self.products.values()
    }

    /// Products grouped by category.
    ///
    /// Categories appear in the order they are first seen; products keep
    /// catalog order within each category.
    #[must_use]
    pub fn group_by_category(&self) -> IndexMap<&str, Vec<&Product>> {
        let mut groups: IndexMap<&str, Vec<&Product>> = IndexMap::new();
        for product in self.products.values() {
            groups.entry(product.category.as_str()).or_default().push(product);
        }
        groups
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

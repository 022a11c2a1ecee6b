//! Menu view grouped by category.

use oven_core::{Catalog, Product};

/// Heading shown above the menu.
pub const MENU_HEADING: &str = "Our Delicious Menu";

/// A product card on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

/// One category section of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub name: String,
    pub products: Vec<ProductCard>,
}

/// The full menu, sections in first-seen category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub heading: &'static str,
    pub sections: Vec<CategorySection>,
}

impl From<&Catalog> for CatalogView {
    fn from(catalog: &Catalog) -> Self {
        let sections = catalog
            .group_by_category()
            .into_iter()
            .map(|(name, products)| CategorySection {
                name: name.to_owned(),
                products: products.into_iter().map(ProductCard::from).collect(),
            })
            .collect();

        Self {
            heading: MENU_HEADING,
            sections,
        }
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
            image: product.image.clone(),
        }
    }
}

//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// An immutable product offered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Menu section the product is listed under.
    pub category: String,
    /// Image path relative to the site root.
    pub image: String,
}

impl Product {
    /// Create a new product record.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }
}

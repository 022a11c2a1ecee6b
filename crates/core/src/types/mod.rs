//! Core types for the storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod location;
pub mod price;
pub mod product;

pub use id::{ProductId, ProductIdError};
pub use location::{DeliveryLocation, LocationError};
pub use price::{CURRENCY_SYMBOL, Price, PriceError};
pub use product::Product;

//! Arts in the Oven Core - Shared types library.
//!
//! This crate provides the types shared by all storefront components:
//! - `storefront` - Cart store, checkout gate, session flag and page handlers
//! - `cli` - Command-line storefront driven against file-backed storage
//!
//! # Architecture
//!
//! The core crate contains only types and the static product catalog - no I/O,
//! no storage access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, products and locations
//! - [`catalog`] - The immutable, ordered product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::*;

//! Presentation adapters.
//!
//! Plain structures derived from cart, catalog and flow state, with every
//! amount already formatted. They hold no state of their own and never touch
//! storage, so they are safe to rebuild on every render.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use account::LoginStatusView;
pub use cart::{CartItemView, CartSummary};
pub use catalog::{CatalogView, CategorySection, MENU_HEADING, ProductCard};
pub use checkout::CheckoutView;

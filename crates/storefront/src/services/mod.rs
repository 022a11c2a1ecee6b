//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Login flag (format-checked password, no accounts)
//! - `checkout` - Empty-cart gate, delivery location, purchase finalization

pub mod auth;
pub mod checkout;

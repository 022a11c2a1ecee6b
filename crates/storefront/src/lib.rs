//! Arts in the Oven storefront library.
//!
//! Cart state, checkout gating and page handlers for the storefront,
//! kept free of any rendering so they can be driven from a page script,
//! the command line, or tests.
//!
//! # Modules
//!
//! - `storage` - Key/value persistence boundary (memory or JSON file)
//! - `cart` - Cart store, rehydrated on page load and persisted on mutation
//! - `services` - Login flag and checkout gate
//! - `views` - Presentation adapters with formatted amounts
//! - `routes` - Page handlers and action dispatch
//! - `state` - Per-page state passed to handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod views;

pub use error::{AppError, Result};
pub use state::PageState;

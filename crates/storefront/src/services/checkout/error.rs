//! Checkout error types.

use thiserror::Error;

use oven_core::LocationError;

use crate::storage::StorageError;

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires at least one item in the cart.
    #[error("Your cart is empty! Please add items before checking out.")]
    EmptyCart,

    /// Purchase finalization requires a saved delivery location.
    #[error("no delivery location saved")]
    MissingLocation,

    /// The submitted location is incomplete.
    #[error("invalid delivery location: {0}")]
    InvalidLocation(#[from] LocationError),

    /// The location record could not be written or removed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

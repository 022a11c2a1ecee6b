//! Cart error types.

use thiserror::Error;

use oven_core::ProductId;

use crate::storage::StorageError;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id is not in the catalog. The cart was not changed.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Incrementing the line would overflow its quantity.
    #[error("quantity limit reached for {0}")]
    QuantityOverflow(ProductId),

    /// A cart held two lines for the same product.
    #[error("duplicate cart line for {0}")]
    DuplicateLine(ProductId),

    /// The persisted cart could not be decoded.
    #[error("malformed persisted cart: {0}")]
    MalformedPersistedState(#[source] serde_json::Error),

    /// The storage backend could not be read.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

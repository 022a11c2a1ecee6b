//! Unified error handling.
//!
//! Each service has its own error enum; `AppError` wraps them so page
//! handlers can return `Result<T, AppError>` and callers can decide what is
//! shown to the user.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout precondition or location write failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Login or logout failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Message safe to show on the page.
    ///
    /// Expected user-facing conditions (empty cart, short password, unknown
    /// product, blank location field) keep their text; backend failures are
    /// reported generically.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Cart(CartError::UnknownProduct(id)) => {
                format!("Sorry, \"{id}\" is not on the menu.")
            }
            Self::Cart(CartError::QuantityOverflow(_)) => {
                "You cannot add more of this item.".to_string()
            }
            Self::Checkout(
                err @ (CheckoutError::EmptyCart | CheckoutError::InvalidLocation(_)),
            ) => err.to_string(),
            Self::Checkout(CheckoutError::MissingLocation) => {
                "Please save a delivery location first.".to_string()
            }
            Self::Auth(err @ AuthError::InvalidCredentialFormat { .. }) => err.to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oven_core::ProductId;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(CheckoutError::EmptyCart);
        assert_eq!(
            err.to_string(),
            "Checkout error: Your cart is empty! Please add items before checking out."
        );
    }

    #[test]
    fn test_user_messages() {
        let unknown = AppError::from(CartError::UnknownProduct(ProductId::parse("xyz").unwrap()));
        assert_eq!(unknown.user_message(), "Sorry, \"xyz\" is not on the menu.");

        let short = AppError::from(AuthError::InvalidCredentialFormat { min_length: 4 });
        assert_eq!(
            short.user_message(),
            "Invalid credentials. Password must be at least 4 characters."
        );

        let storage = AppError::from(StorageError::QuotaExceeded {
            key: "k".to_string(),
            needed: 10,
            quota: 1,
        });
        assert_eq!(
            storage.user_message(),
            "Something went wrong. Please try again."
        );
    }
}

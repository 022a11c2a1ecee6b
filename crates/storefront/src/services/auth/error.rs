//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during login and logout.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The password does not have the accepted format.
    #[error("Invalid credentials. Password must be at least {min_length} characters.")]
    InvalidCredentialFormat {
        /// Minimum accepted password length.
        min_length: usize,
    },

    /// The login flag could not be written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

//! Login flag service.
//!
//! The storefront has no accounts: "logged in" is a flag in storage used only
//! to gate what the login page shows. The password is checked for format and
//! then discarded.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use crate::storage::Storage;

/// Minimum password length accepted by default.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 4;

/// Value stored under the login key while logged in.
const LOGGED_IN: &str = "true";

/// Login flag service.
pub struct AuthService<'a> {
    storage: &'a dyn Storage,
    key: &'a str,
    min_password_length: usize,
}

impl<'a> AuthService<'a> {
    /// Create a login service over `storage` using the flag `key`.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage, key: &'a str, min_password_length: usize) -> Self {
        Self {
            storage,
            key,
            min_password_length,
        }
    }

    /// Returns `true` iff the flag holds exactly `"true"`.
    ///
    /// An unreadable store counts as logged out.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        match self.storage.get_item(self.key) {
            Ok(value) => value.as_deref() == Some(LOGGED_IN),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read login flag");
                false
            }
        }
    }

    /// Set the login flag if `password` has an acceptable format.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentialFormat` if the password is too
    /// short (nothing is written), or `AuthError::Storage` if the flag could
    /// not be saved.
    pub fn login(&self, password: &SecretString) -> Result<(), AuthError> {
        validate_password(password.expose_secret(), self.min_password_length)?;

        self.storage.set_item(self.key, LOGGED_IN)?;
        info!("User logged in");
        Ok(())
    }

    /// Clear the login flag.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the flag could not be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove_item(self.key)?;
        info!("User logged out");
        Ok(())
    }
}

/// Validate password format.
fn validate_password(password: &str, min_length: usize) -> Result<(), AuthError> {
    if password.chars().count() < min_length {
        debug!(min_length, "Rejected password below minimum length");
        return Err(AuthError::InvalidCredentialFormat { min_length });
    }
    Ok(())
}

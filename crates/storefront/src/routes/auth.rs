//! Login page handlers.

use secrecy::SecretString;
use tracing::instrument;

use super::{Navigation, Outcome};
use crate::error::Result;
use crate::state::PageState;
use crate::views::LoginStatusView;

/// Login status for the login page.
#[must_use]
pub fn status(state: &PageState<'_>) -> LoginStatusView {
    LoginStatusView::new(&state.config().store_name, state.auth().is_logged_in())
}

/// Log in with a format-checked password, then reload.
///
/// # Errors
///
/// Returns `AppError::Auth` if the password is too short (shown as a message
/// on the form) or the flag could not be saved.
#[instrument(skip(state, password))]
pub fn login(state: &mut PageState<'_>, password: &SecretString) -> Result<Outcome> {
    state.auth().login(password)?;
    Ok(Outcome::stay(state)
        .with_notice("Successfully logged in!")
        .navigate(Navigation::Reload))
}

/// Log out, then reload.
///
/// # Errors
///
/// Returns `AppError::Auth` if the flag could not be removed.
#[instrument(skip(state))]
pub fn logout(state: &mut PageState<'_>) -> Result<Outcome> {
    state.auth().logout()?;
    Ok(Outcome::stay(state)
        .with_notice("You have been logged out.")
        .navigate(Navigation::Reload))
}

//! Location page handlers: delivery location and purchase finalization.

use tracing::instrument;

use super::{Navigation, Outcome, Page};
use crate::error::Result;
use crate::state::PageState;
use crate::views::CheckoutView;

/// What the location page shows.
#[must_use]
pub fn show(state: &PageState<'_>) -> CheckoutView {
    CheckoutView::from(state.checkout().stage(state.cart()))
}

/// Save the delivery location, then reload to show it.
///
/// # Errors
///
/// Returns `AppError::Checkout` if the cart is empty, a field is blank, or
/// the location could not be saved.
#[instrument(skip(state))]
pub fn save_location(
    state: &mut PageState<'_>,
    region: &str,
    city: &str,
    barangay: &str,
) -> Result<Outcome> {
    state
        .checkout()
        .save_location(state.cart(), region, city, barangay)?;

    Ok(Outcome::stay(state)
        .with_notice("Delivery location saved! Please click 'Finalize Purchase' to confirm the order.")
        .navigate(Navigation::Reload))
}

/// Finalize the purchase and return to the landing page.
///
/// # Errors
///
/// Returns `AppError::Checkout` if the cart is empty, no location is saved,
/// or the location could not be removed.
#[instrument(skip(state))]
pub fn finalize_purchase(state: &mut PageState<'_>) -> Result<Outcome> {
    let gate = state.checkout();
    gate.finalize_purchase(state.cart_mut())?;

    let notice = format!(
        "Thank you for your purchase from {}!",
        state.config().store_name
    );
    Ok(Outcome::stay(state)
        .with_notice(notice)
        .navigate(Navigation::Redirect(Page::Landing)))
}

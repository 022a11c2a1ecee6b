//! Location / checkout page view.

use oven_core::DeliveryLocation;

use crate::services::checkout::{CheckoutError, CheckoutStage};

/// What the checkout page shows.
///
/// With an empty cart only the notice is shown: the location form and the
/// finalize button are suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub notice: Option<String>,
    pub show_location_form: bool,
    pub saved_location: Option<DeliveryLocation>,
    pub show_finalize_button: bool,
}

impl From<CheckoutStage> for CheckoutView {
    fn from(stage: CheckoutStage) -> Self {
        match stage {
            CheckoutStage::EmptyCart => Self {
                notice: Some(CheckoutError::EmptyCart.to_string()),
                show_location_form: false,
                saved_location: None,
                show_finalize_button: false,
            },
            CheckoutStage::NeedsLocation => Self {
                notice: None,
                show_location_form: true,
                saved_location: None,
                show_finalize_button: false,
            },
            CheckoutStage::ReadyToFinalize(location) => Self {
                notice: None,
                show_location_form: false,
                saved_location: Some(location),
                show_finalize_button: true,
            },
        }
    }
}

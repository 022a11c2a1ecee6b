//! Page handlers.
//!
//! The rendering layer never calls storefront logic ad hoc: it binds the
//! named handlers below, or sends an [`Action`] through
//! [`dispatch`]. Each handler runs to completion, including persistence,
//! before returning.
//!
//! # Pages
//!
//! ```text
//! index.html     - Landing page (cart badge and modal only)
//! products.html  - Menu grouped by category, add-to-cart buttons
//! login.html     - Login status, login form / logout button
//! location.html  - Delivery location form, finalize purchase
//! ```
//!
//! The cart modal is available on every page.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;

use secrecy::SecretString;

use oven_core::ProductId;

use crate::error::Result;
use crate::state::PageState;
use crate::views::CartSummary;

/// Storefront pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Products,
    Login,
    Location,
}

impl Page {
    /// Document path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "index.html",
            Self::Products => "products.html",
            Self::Login => "login.html",
            Self::Location => "location.html",
        }
    }
}

/// What the page should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Re-render in place.
    Stay,
    /// Reload the current page (new page load, state rehydrated).
    Reload,
    /// Go to another page.
    Redirect(Page),
}

/// User actions a page can bind.
#[derive(Debug)]
pub enum Action {
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    FinalizePurchase,
    Login(SecretString),
    Logout,
    SaveLocation {
        region: String,
        city: String,
        barangay: String,
    },
}

/// Result of a handled action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Message to show the user, if any.
    pub notice: Option<String>,
    pub navigation: Navigation,
    /// Cart after the action, for the badge and modal.
    pub cart: CartSummary,
}

impl Outcome {
    fn stay(state: &PageState<'_>) -> Self {
        Self {
            notice: None,
            navigation: Navigation::Stay,
            cart: state.cart_summary(),
        }
    }

    fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    const fn navigate(mut self, navigation: Navigation) -> Self {
        self.navigation = navigation;
        self
    }
}

/// Route an action to its handler.
///
/// # Errors
///
/// Returns the handler's error; the page state is unchanged when an error
/// is returned.
pub fn dispatch(state: &mut PageState<'_>, action: Action) -> Result<Outcome> {
    match action {
        Action::AddToCart(id) => cart::add(state, &id),
        Action::RemoveFromCart(id) => Ok(cart::remove(state, &id)),
        Action::FinalizePurchase => checkout::finalize_purchase(state),
        Action::Login(password) => auth::login(state, &password),
        Action::Logout => auth::logout(state),
        Action::SaveLocation {
            region,
            city,
            barangay,
        } => checkout::save_location(state, &region, &city, &barangay),
    }
}

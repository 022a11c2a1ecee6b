//! Menu page handler.

use crate::state::PageState;
use crate::views::CatalogView;

/// The menu, grouped by category.
#[must_use]
pub fn menu(state: &PageState<'_>) -> CatalogView {
    CatalogView::from(state.catalog())
}

//! Products page.

use std::io::Write;

use oven_storefront::PageState;
use oven_storefront::routes::products;

use crate::CliError;

/// Render the menu grouped by category.
pub fn show(state: &PageState<'_>, out: &mut impl Write) -> Result<(), CliError> {
    let menu = products::menu(state);

    writeln!(out, "{}", menu.heading)?;
    for section in &menu.sections {
        writeln!(out)?;
        writeln!(out, "{}", section.name)?;
        for card in &section.products {
            writeln!(out, "  {:<6} {:<36} {:>10}", card.id, card.name, card.price)?;
        }
    }
    Ok(())
}

//! Login page.

use std::io::Write;

use secrecy::SecretString;

use oven_storefront::PageState;
use oven_storefront::routes::{self, Action};

use super::write_outcome;
use crate::CliError;

pub fn status(state: &PageState<'_>, out: &mut impl Write) -> Result<(), CliError> {
    let view = routes::auth::status(state);
    writeln!(out, "{}", view.message)?;
    Ok(())
}

pub fn login(
    state: &mut PageState<'_>,
    password: SecretString,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let outcome = routes::dispatch(state, Action::Login(password))?;
    write_outcome(out, &outcome)?;
    Ok(())
}

pub fn logout(state: &mut PageState<'_>, out: &mut impl Write) -> Result<(), CliError> {
    let outcome = routes::dispatch(state, Action::Logout)?;
    write_outcome(out, &outcome)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oven_core::Catalog;
    use oven_storefront::config::StorefrontConfig;
    use oven_storefront::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_login_then_status() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::arts_in_the_oven();
        let storage = MemoryStorage::new();
        let mut state = PageState::load(&config, &catalog, &storage);

        let mut out = Vec::new();
        login(&mut state, SecretString::from("pass1234"), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Successfully logged in!"));

        let mut out = Vec::new();
        status(&state, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Welcome back to Arts in the Oven!\n"
        );
    }
}

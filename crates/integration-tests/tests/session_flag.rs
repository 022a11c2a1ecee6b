//! Login flag across pages.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use oven_integration_tests::TestShop;
use oven_storefront::config::StorefrontConfig;
use oven_storefront::routes::{self, Action};
use oven_storefront::storage::{FileStorage, Storage, StorageKeys};

#[test]
fn test_login_logout_across_pages() {
    let shop = TestShop::new();

    {
        let storage = shop.storage();
        let mut page = shop.page(&storage);
        assert!(!routes::auth::status(&page).logged_in);
        routes::dispatch(&mut page, Action::Login(SecretString::from("hunter2"))).unwrap();
    }
    {
        let storage = shop.storage();
        assert_eq!(
            storage.get_item("artsInTheOvenLoggedIn").unwrap().as_deref(),
            Some("true")
        );
        let mut page = shop.page(&storage);
        assert!(routes::auth::status(&page).show_logout_button);
        routes::dispatch(&mut page, Action::Logout).unwrap();
    }

    let storage = shop.storage();
    let page = shop.page(&storage);
    assert_eq!(
        routes::auth::status(&page).message,
        "Please log in to manage your account."
    );
    assert!(storage.get_item("artsInTheOvenLoggedIn").unwrap().is_none());
}

#[test]
fn test_short_password_writes_nothing() {
    let shop = TestShop::new();
    let storage = shop.storage();
    let mut page = shop.page(&storage);

    let err = routes::dispatch(&mut page, Action::Login(SecretString::from("abc"))).unwrap_err();
    assert_eq!(
        err.user_message(),
        "Invalid credentials. Password must be at least 4 characters."
    );
    assert!(!shop.storage_path().exists());
}

#[test]
fn test_key_prefix_isolates_stores() {
    let shop = TestShop::new();
    let other = StorefrontConfig {
        storage_path: shop.storage_path().to_path_buf(),
        keys: StorageKeys::with_prefix("otherShop"),
        ..StorefrontConfig::default()
    };

    let storage = shop.storage();
    let mut page = shop.page(&storage);
    routes::dispatch(&mut page, Action::Login(SecretString::from("pass1234"))).unwrap();

    let storage = FileStorage::new(&other.storage_path);
    let page = oven_storefront::PageState::load(&other, &shop.catalog, &storage);
    assert!(!routes::auth::status(&page).logged_in);
    assert!(storage.get_item("otherShopLoggedIn").unwrap().is_none());
}

//! End-to-end storefront sessions.

use galaxy_auth::{AuthError, AuthMode, LoginForm, SignupForm};
use galaxy_commerce::prelude::*;
use galaxy_storefront::{StoreConfig, Storefront, StorefrontError, View};

fn product(id: u64, name: &str, price: i64) -> Product {
    Product::from_draft(
        ProductId::new(id),
        ProductDraft::new(name, "Brand", Money::vnd(price), "Laptop", "/img"),
    )
}

fn seeded() -> Storefront {
    let catalog = Catalog::from_products(
        Currency::VND,
        vec![
            product(1, "Budget", 10_000_000),
            product(2, "Midrange", 25_000_000),
            product(3, "Flagship", 45_000_000),
        ],
    )
    .unwrap();
    Storefront::new(StoreConfig::default(), catalog)
}

#[test]
fn test_browse_add_filter_total_logout() {
    let mut store = seeded();

    store.add_to_cart(ProductId::new(2)).unwrap();
    store.add_to_cart(ProductId::new(2)).unwrap();
    let entries: Vec<(u64, i64)> = store
        .cart()
        .items()
        .iter()
        .map(|i| (i.product.id.get(), i.quantity))
        .collect();
    assert_eq!(entries, vec![(2, 2)]);

    store.set_price("20-40".parse().unwrap());
    let listing: Vec<u64> = store.listing().iter().map(|p| p.id.get()).collect();
    assert_eq!(listing, vec![2]);

    assert_eq!(store.cart_total(), Money::vnd(50_000_000));
    assert_eq!(store.cart_total().display(), "50.000.000\u{a0}\u{20ab}");

    assert!(store.identity().is_none());
    store.logout();
    assert!(store.identity().is_none());
}

#[test]
fn test_signup_password_mismatch_leaves_identity_unset() {
    let mut store = seeded();
    store.open_auth(AuthMode::Signup);

    let result = store.signup(&SignupForm::new("shopper@techgalaxy.vn", "abc", "abd"));
    assert_eq!(
        result.err(),
        Some(StorefrontError::Auth(AuthError::PasswordMismatch))
    );
    assert!(store.identity().is_none());
    assert!(store.panels().auth);
    assert_eq!(store.form_error().as_deref(), Some("passwords do not match"));
}

#[test]
fn test_full_shopping_session() {
    let mut store = Storefront::new(StoreConfig::default(), Catalog::builtin());

    store.set_category("Smartphone");
    store.set_sort(SortOrder::PriceDesc);
    let first = store.listing()[0].id;
    store.select_product(first).unwrap();
    assert_eq!(store.view(), View::Detail(first));

    store.add_to_cart(first).unwrap();
    store.increment(first);
    store.clear_selection();

    store.open_auth(AuthMode::Login);
    store
        .login(&LoginForm::new("shopper@techgalaxy.vn", "secret"))
        .unwrap();
    assert_eq!(
        store.identity().map(|i| i.display_name().to_string()),
        Some("shopper".to_string())
    );

    let expected = store.cart_total();
    let receipt = store.checkout().unwrap();
    assert_eq!(receipt.total(), expected);
    assert_eq!(receipt.item_count(), 2);
    assert_eq!(receipt.customer.as_deref(), Some("shopper@techgalaxy.vn"));
    assert_eq!(store.item_count(), 0);
    assert!(store.checkout().is_none());
}

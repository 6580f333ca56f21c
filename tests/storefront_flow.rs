//! Integration tests for the storefront flow, driven through `Store::dispatch`.
//!
//! Cart used by the worked examples:
//!
//! - Kopi Susu: RM 12.00 × 2 = RM 24.00
//! - Roti Bakar: RM 8.50 × 1 = RM 8.50
//! - Subtotal: RM 32.50
//!
//! - `DISKAUN10`: 10% off -> RM 3.25 discount, RM 29.25 total
//! - `POTONGAN5`: RM 5.00 off -> RM 27.50 total
//! - `XYZ`: no match -> full price

use jiff::Timestamp;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rusty_money::{Money, iso};
use testresult::TestResult;

use bratstvo::prelude::*;

fn store() -> Result<Store<'static>, FixtureError> {
    Ok(StoreConfig::bratstvo()?.into_store())
}

fn example_cart(store: &mut Store<'_>) -> Result<(), StoreError> {
    for id in [1, 1, 2] {
        store.dispatch(StoreAction::AddToCart(ProductId::new(id)))?;
    }

    Ok(())
}

fn fill_customer(store: &mut Store<'_>) -> Result<(), StoreError> {
    for (field, value) in [
        (CustomerField::Name, "Nur Aisyah"),
        (CustomerField::Email, "aisyah@contoh.com"),
        (CustomerField::Phone, "012-3456789"),
        (CustomerField::Address, "12 Jalan Bunga, Kuala Lumpur"),
    ] {
        store.dispatch(StoreAction::SetCustomerField(field, value.to_string()))?;
    }

    Ok(())
}

#[test]
fn percentage_code_example() -> TestResult {
    let mut store = store()?;

    example_cart(&mut store)?;
    store.dispatch(StoreAction::SetDiscountCode("DISKAUN10".to_string()))?;

    let receipt = store.receipt()?;

    assert_eq!(receipt.subtotal(), Money::from_minor(3250, iso::MYR));
    assert_eq!(receipt.discount(), Money::from_minor(325, iso::MYR));
    assert_eq!(receipt.total(), Money::from_minor(2925, iso::MYR));
    assert_eq!(format_money(&receipt.total()), "RM 29.25");

    Ok(())
}

#[test]
fn flat_code_example() -> TestResult {
    let mut store = store()?;

    example_cart(&mut store)?;
    store.dispatch(StoreAction::SetDiscountCode("POTONGAN5".to_string()))?;

    let receipt = store.receipt()?;

    assert_eq!(receipt.discount(), Money::from_minor(500, iso::MYR));
    assert_eq!(receipt.total(), Money::from_minor(2750, iso::MYR));

    Ok(())
}

#[test]
fn unknown_code_example() -> TestResult {
    let mut store = store()?;

    example_cart(&mut store)?;
    store.dispatch(StoreAction::SetDiscountCode("XYZ".to_string()))?;

    let receipt = store.receipt()?;

    assert_eq!(receipt.discount(), Money::from_minor(0, iso::MYR));
    assert_eq!(receipt.total(), receipt.subtotal());
    assert_eq!(receipt.discount_label(), "Tiada");
    assert!(store.discount_status().is_invalid());

    Ok(())
}

#[test]
fn flat_discount_over_subtotal_clamps_total() -> TestResult {
    let mut store = store()?;

    store.dispatch(StoreAction::AddToCart(ProductId::new(2)))?;
    store.dispatch(StoreAction::SetDiscountCode("HAFIZSR".to_string()))?;

    let receipt = store.receipt()?;

    assert_eq!(receipt.discount(), Money::from_minor(1000, iso::MYR));
    assert_eq!(receipt.total(), Money::from_minor(0, iso::MYR));

    Ok(())
}

#[test]
fn checkout_without_customer_info_places_nothing() -> TestResult {
    let mut store = store()?;

    example_cart(&mut store)?;
    store.dispatch(StoreAction::SetCustomerField(
        CustomerField::Name,
        "Nur Aisyah".to_string(),
    ))?;

    store.dispatch(StoreAction::Navigate(Page::Checkout))?;

    let err = store
        .dispatch(StoreAction::PlaceOrder)
        .err()
        .ok_or("expected checkout to fail")?;

    assert_eq!(
        err.user_message(),
        "Sila isi semua maklumat pelanggan yang diperlukan."
    );
    assert!(store.current_order().is_none());
    assert_eq!(store.cart_count(), 2);

    Ok(())
}

#[test]
fn checkout_with_empty_cart_places_nothing() -> TestResult {
    let mut store = store()?;

    fill_customer(&mut store)?;

    store.dispatch(StoreAction::Navigate(Page::Checkout))?;

    let err = store
        .dispatch(StoreAction::PlaceOrder)
        .err()
        .ok_or("expected checkout to fail")?;

    assert!(matches!(err, StoreError::Checkout(CheckoutError::EmptyCart)));
    assert!(store.current_order().is_none());
    assert_eq!(store.customer().name, "Nur Aisyah");

    Ok(())
}

#[test]
fn successful_checkout_snapshots_then_resets() -> TestResult {
    let mut store = store()?;

    example_cart(&mut store)?;
    store.dispatch(StoreAction::SetDiscountCode("diskaun10".to_string()))?;
    fill_customer(&mut store)?;

    let lines = store.cart().lines().to_vec();
    let customer = store.customer().clone();
    let receipt = store.receipt()?;
    let now = Timestamp::from_millisecond(1_760_000_000_000)?;

    store.dispatch(StoreAction::Navigate(Page::Checkout))?;
    store.dispatch_with(StoreAction::PlaceOrder, now, &mut StdRng::seed_from_u64(11))?;

    let order = store.current_order().ok_or("expected an order")?;

    assert_eq!(order.lines(), lines.as_slice());
    assert_eq!(order.customer(), &customer);
    assert_eq!(order.receipt(), &receipt);
    assert_eq!(
        order.receipt().applied_code().map(DiscountCode::as_str),
        Some("DISKAUN10")
    );
    assert!(order.id().as_str().starts_with("ORD-1760000000000-"));

    assert_eq!(store.page(), Page::OrderConfirmation);
    assert!(store.cart().is_empty());
    assert_eq!(store.discount_code(), "");
    assert_eq!(store.customer(), &CustomerInfo::default());

    Ok(())
}

#[test]
fn random_edit_sequences_keep_cart_invariants() -> TestResult {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..50 {
        let mut store = store()?;

        for _ in 0..40 {
            let id = ProductId::new(rng.gen_range(1..=5));

            let action = match rng.gen_range(0..3) {
                0 => StoreAction::AddToCart(id),
                1 => StoreAction::SetQuantity(id, rng.gen_range(-2..=6)),
                _ => StoreAction::RemoveFromCart(id),
            };

            store.dispatch(action)?;

            let cart = store.cart();
            let mut ids: Vec<ProductId> = cart.iter().map(CartLine::id).collect();

            ids.sort();
            ids.dedup();

            assert_eq!(ids.len(), cart.len(), "one line per product");
            assert!(
                cart.iter().all(|line| line.quantity() >= 1),
                "no line below quantity one"
            );

            let expected: i64 = cart
                .iter()
                .map(|line| line.unit_price().to_minor_units() * i64::from(line.quantity()))
                .sum();

            assert_eq!(cart.subtotal()?.to_minor_units(), expected);
        }
    }

    Ok(())
}

#[test]
fn discount_never_pushes_total_below_zero() -> TestResult {
    let mut rng = StdRng::seed_from_u64(77);
    let codes = ["", "DISKAUN10", "POTONGAN5", "HAFIZSR", "MHHQ", "XYZ"];

    for _ in 0..100 {
        let mut store = store()?;

        for _ in 0..rng.gen_range(0..4) {
            store.dispatch(StoreAction::AddToCart(ProductId::new(rng.gen_range(1..=5))))?;
        }

        let code = codes
            .get(rng.gen_range(0..codes.len()))
            .ok_or("code index out of range")?;

        store.dispatch(StoreAction::SetDiscountCode((*code).to_string()))?;

        let receipt = store.receipt()?;

        assert!(receipt.total().to_minor_units() >= 0);
        assert!(receipt.total().to_minor_units() <= receipt.subtotal().to_minor_units());
    }

    Ok(())
}

#[test]
fn unknown_page_name_goes_home() -> TestResult {
    let mut store = store()?;

    store.dispatch(StoreAction::Navigate(Page::from_name("checkout")))?;
    assert_eq!(store.page(), Page::Checkout);

    store.dispatch(StoreAction::Navigate(Page::from_name("admin")))?;
    assert_eq!(store.page(), Page::Home);

    Ok(())
}

#[test]
fn duplicate_product_id_fixture_fails_to_load() {
    let yaml = r#"
products:
  - id: 4
    name: Mee Goreng
    price: "13.50 MYR"
    image: mee.png
  - id: 4
    name: Baju
    price: "30.00 MYR"
    image: baju.png
"#;

    assert!(matches!(
        Catalog::from_yaml(yaml),
        Err(FixtureError::DuplicateProductId(id)) if id == ProductId::new(4)
    ));
}

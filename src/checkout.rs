//! Checkout
//!
//! Validates the customer form and the cart, then freezes an [`Order`].

use jiff::Timestamp;
use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    cart::Cart,
    customer::{CustomerField, CustomerInfo},
    discounts::DiscountTable,
    orders::{Order, OrderId},
    receipt::{Receipt, ReceiptError},
};

/// Reasons a checkout is rejected.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more customer fields are empty.
    #[error("missing customer information: {0:?}")]
    MissingCustomerInfo(SmallVec<[CustomerField; 4]>),

    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// The cart could not be priced.
    #[error(transparent)]
    Pricing(#[from] ReceiptError),
}

impl CheckoutError {
    /// Message shown to the shopper.
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckoutError::MissingCustomerInfo(_) => {
                "Sila isi semua maklumat pelanggan yang diperlukan."
            }
            CheckoutError::EmptyCart => {
                "Troli anda kosong. Sila tambah item sebelum daftar keluar."
            }
            CheckoutError::Pricing(_) => "Jumlah pesanan tidak dapat dikira.",
        }
    }
}

/// Validate and freeze an order. Leaves the inputs untouched.
///
/// Customer fields are checked before the cart.
///
/// # Errors
///
/// Returns a [`CheckoutError`] if a customer field is empty, the cart is
/// empty, or the cart cannot be priced.
pub fn checkout<'a, R: Rng + ?Sized>(
    cart: &Cart<'a>,
    discounts: &DiscountTable<'a>,
    code_input: &str,
    customer: &CustomerInfo,
    now: Timestamp,
    rng: &mut R,
) -> Result<Order<'a>, CheckoutError> {
    let missing = customer.missing_fields();

    if !missing.is_empty() {
        warn!(?missing, "checkout rejected: missing customer information");

        return Err(CheckoutError::MissingCustomerInfo(missing));
    }

    if cart.is_empty() {
        warn!("checkout rejected: cart is empty");

        return Err(CheckoutError::EmptyCart);
    }

    let receipt = Receipt::price(cart, discounts, code_input)?;
    let id = OrderId::generate(now, rng);

    info!(
        order_id = %id,
        lines = cart.len(),
        total_minor = receipt.total().to_minor_units(),
        "order placed"
    );

    Ok(Order::new(
        id,
        cart.lines().to_vec(),
        customer.clone(),
        receipt,
        now,
    ))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Aisyah".to_string(),
            email: "aisyah@contoh.com".to_string(),
            address: "Kuala Lumpur".to_string(),
            phone: "012-3456789".to_string(),
        }
    }

    fn cart<'a>() -> Result<Cart<'a>, crate::cart::CartError> {
        let mee = Product::new(4, "Mee Goreng", Money::from_minor(1350, iso::MYR), "mee.png");
        let mut cart = Cart::new(iso::MYR);

        cart.add(&mee)?;
        cart.add(&mee)?;

        Ok(cart)
    }

    #[test]
    fn places_order_with_snapshot() -> TestResult {
        let cart = cart()?;
        let discounts = DiscountTable::bratstvo(iso::MYR)?;
        let now = Timestamp::from_millisecond(1_750_000_000_000)?;

        let order = checkout(
            &cart,
            &discounts,
            "diskaun10",
            &customer(),
            now,
            &mut StdRng::seed_from_u64(3),
        )?;

        assert_eq!(order.lines(), cart.lines());
        assert_eq!(order.customer(), &customer());
        assert_eq!(order.receipt().subtotal(), Money::from_minor(2700, iso::MYR));
        assert_eq!(order.receipt().discount(), Money::from_minor(270, iso::MYR));
        assert_eq!(order.receipt().total(), Money::from_minor(2430, iso::MYR));
        assert_eq!(order.placed_at(), now);
        assert!(order.id().as_str().starts_with("ORD-1750000000000-"));

        Ok(())
    }

    #[test]
    fn missing_fields_are_reported_first() -> TestResult {
        let discounts = DiscountTable::bratstvo(iso::MYR)?;
        let mut info = customer();

        info.email.clear();

        let result = checkout(
            &Cart::new(iso::MYR),
            &discounts,
            "",
            &info,
            Timestamp::now(),
            &mut StdRng::seed_from_u64(0),
        );

        let Err(CheckoutError::MissingCustomerInfo(missing)) = result else {
            return Err("expected missing customer info".into());
        };

        assert_eq!(missing.as_slice(), [CustomerField::Email]);

        Ok(())
    }

    #[test]
    fn empty_cart_is_rejected() -> TestResult {
        let discounts = DiscountTable::bratstvo(iso::MYR)?;

        let result = checkout(
            &Cart::new(iso::MYR),
            &discounts,
            "",
            &customer(),
            Timestamp::now(),
            &mut StdRng::seed_from_u64(0),
        );

        let err = result.err().ok_or("expected an error")?;

        assert!(matches!(err, CheckoutError::EmptyCart));
        assert_eq!(
            err.user_message(),
            "Troli anda kosong. Sila tambah item sebelum daftar keluar."
        );

        Ok(())
    }
}

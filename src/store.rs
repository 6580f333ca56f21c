//! Store
//!
//! Single owner of storefront state. Every change goes through
//! [`Store::dispatch`], one action per user event.

use std::fmt;

use jiff::Timestamp;
use rand::Rng;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cart::{Cart, CartError},
    catalog::Catalog,
    checkout::{CheckoutError, checkout},
    customer::{CustomerField, CustomerInfo},
    discounts::{DiscountStatus, DiscountTable},
    orders::Order,
    products::ProductId,
    receipt::{Receipt, ReceiptError},
};

/// Storefront pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// Product grid
    #[default]
    Home,

    /// Cart lines
    Cart,

    /// Customer form and order summary
    Checkout,

    /// Last placed order
    OrderConfirmation,
}

impl Page {
    /// Resolve a page name. Unknown names fall back to [`Page::Home`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "cart" => Page::Cart,
            "checkout" => Page::Checkout,
            "order-confirmation" => Page::OrderConfirmation,
            _ => Page::Home,
        }
    }

    /// Page name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::OrderConfirmation => "order-confirmation",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User events the store reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Show a page.
    Navigate(Page),

    /// Add one unit of a catalog product.
    AddToCart(ProductId),

    /// Replace a line's quantity. Zero or below removes it.
    SetQuantity(ProductId, i64),

    /// Drop a line.
    RemoveFromCart(ProductId),

    /// Replace the raw discount code input.
    SetDiscountCode(String),

    /// Replace one customer field.
    SetCustomerField(CustomerField, String),

    /// Run checkout.
    PlaceOrder,
}

/// Errors from dispatching an action.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The product id is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Cart edit failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Orders can only be placed from the checkout page.
    #[error("cannot place an order from the {0} page")]
    NotAtCheckout(Page),

    /// Checkout was rejected.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl StoreError {
    /// Message shown to the shopper.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::UnknownProduct(_) | StoreError::Cart(_) => {
                "Produk tidak dapat ditambah ke troli."
            }
            StoreError::NotAtCheckout(_) => {
                "Sila ke halaman daftar keluar untuk membuat pesanan."
            }
            StoreError::Checkout(err) => err.user_message(),
        }
    }
}

/// Storefront state.
#[derive(Debug, Clone)]
pub struct Store<'a> {
    catalog: Catalog<'a>,
    discounts: DiscountTable<'a>,
    page: Page,
    cart: Cart<'a>,
    discount_code: String,
    customer: CustomerInfo,
    current_order: Option<Order<'a>>,
}

impl<'a> Store<'a> {
    /// A fresh store on the home page with an empty cart.
    pub fn new(catalog: Catalog<'a>, discounts: DiscountTable<'a>) -> Self {
        let cart = Cart::new(catalog.currency());

        Self {
            catalog,
            discounts,
            page: Page::Home,
            cart,
            discount_code: String::new(),
            customer: CustomerInfo::default(),
            current_order: None,
        }
    }

    /// Apply an action using the wall clock and thread RNG for order ids.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the action is rejected. State is unchanged on error.
    pub fn dispatch(&mut self, action: StoreAction) -> Result<(), StoreError> {
        self.dispatch_with(action, Timestamp::now(), &mut rand::thread_rng())
    }

    /// Apply an action with an explicit clock reading and random source.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the action is rejected. State is unchanged on error.
    pub fn dispatch_with<R: Rng + ?Sized>(
        &mut self,
        action: StoreAction,
        now: Timestamp,
        rng: &mut R,
    ) -> Result<(), StoreError> {
        debug!(?action, "dispatch");

        match action {
            StoreAction::Navigate(page) => {
                self.page = page;
            }
            StoreAction::AddToCart(id) => {
                let product = self
                    .catalog
                    .get(id)
                    .ok_or(StoreError::UnknownProduct(id))?;

                self.cart.add(product)?;
            }
            StoreAction::SetQuantity(id, quantity) => {
                self.cart.set_quantity(id, quantity);
            }
            StoreAction::RemoveFromCart(id) => {
                self.cart.remove(id);
            }
            StoreAction::SetDiscountCode(code) => {
                self.discount_code = code;
            }
            StoreAction::SetCustomerField(field, value) => {
                self.customer.set(field, value);
            }
            StoreAction::PlaceOrder => {
                self.place_order(now, rng)?;
            }
        }

        Ok(())
    }

    fn place_order<R: Rng + ?Sized>(
        &mut self,
        now: Timestamp,
        rng: &mut R,
    ) -> Result<(), StoreError> {
        if self.page != Page::Checkout {
            return Err(StoreError::NotAtCheckout(self.page));
        }

        let order = checkout(
            &self.cart,
            &self.discounts,
            &self.discount_code,
            &self.customer,
            now,
            rng,
        )?;

        info!(order_id = %order.id(), "showing order confirmation");

        self.cart.clear();
        self.discount_code.clear();
        self.customer.clear();
        self.current_order = Some(order);
        self.page = Page::OrderConfirmation;

        Ok(())
    }

    /// Current pricing of the cart with the entered code.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the cart cannot be priced.
    pub fn receipt(&self) -> Result<Receipt<'a>, ReceiptError> {
        Receipt::price(&self.cart, &self.discounts, &self.discount_code)
    }

    /// Whether the entered code is empty, applied or invalid.
    pub fn discount_status(&self) -> DiscountStatus {
        self.discounts.status(&self.discount_code)
    }

    /// Badge count: number of distinct products in the cart.
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    /// Cart subtotal, or zero if it cannot be priced.
    pub fn subtotal_or_zero(&self) -> Money<'a, Currency> {
        self.cart
            .subtotal()
            .unwrap_or_else(|_err| Money::from_minor(0, self.cart.currency()))
    }

    /// Current page
    pub fn page(&self) -> Page {
        self.page
    }

    /// Product catalog
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// Discount codes
    pub fn discounts(&self) -> &DiscountTable<'a> {
        &self.discounts
    }

    /// Cart
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Raw discount code input
    pub fn discount_code(&self) -> &str {
        &self.discount_code
    }

    /// Customer form values
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Most recently placed order
    pub fn current_order(&self) -> Option<&Order<'a>> {
        self.current_order.as_ref()
    }
}

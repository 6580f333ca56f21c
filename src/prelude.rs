//! Bratstvo prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::Catalog,
    checkout::{CheckoutError, checkout},
    config::StoreConfig,
    customer::{CustomerField, CustomerInfo},
    discounts::{DiscountCode, DiscountError, DiscountRule, DiscountStatus, DiscountTable},
    fixtures::FixtureError,
    money::{format_money, format_price},
    orders::{Order, OrderId, PaymentMethod},
    pricing::TotalPriceError,
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError},
    store::{Page, Store, StoreAction, StoreError},
};

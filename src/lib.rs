//! Bratstvo
//!
//! Storefront engine for a small shop: product catalog, cart, discount codes,
//! checkout and order confirmation. All state lives in a single [`store::Store`]
//! that is changed one action at a time.
//!
//! Money is handled in minor units with `rusty-money`; percentage discounts
//! round half away from zero and flat discounts clamp the total at zero.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod customer;
pub mod discounts;
pub mod fixtures;
pub mod money;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod store;
pub mod utils;

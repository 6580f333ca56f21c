//! Cart
//!
//! Line items keyed by product id. A line exists only while its quantity is at
//! least one, and there is never more than one line per product.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::{TotalPriceError, line_total, total_price},
    products::{Product, ProductId},
};

/// Errors related to cart edits.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// A product paired with a quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// A fresh line holding one unit of `product`.
    pub fn new(product: Product<'a>) -> Self {
        Self::with_quantity(product, 1)
    }

    /// A line holding `quantity` units, never fewer than one.
    pub(crate) fn with_quantity(product: Product<'a>, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    /// The product on this line.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Product id, the line key.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Unit price.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.product.price
    }

    /// Quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the line total overflows.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_total(self)
    }
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'a Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'a Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`, creating its line on first add.
    ///
    /// Returns the line's new quantity. Quantities saturate at `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::CurrencyMismatch`] if the product is priced in a
    /// different currency from the cart.
    pub fn add(&mut self, product: &Product<'a>) -> Result<u32, CartError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let quantity = if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(CartLine::new(product.clone()));
            1
        };

        debug!(product_id = %product.id, quantity, "added product to cart");

        Ok(quantity)
    }

    /// Replace a line's quantity. Zero or below removes the line.
    ///
    /// Quantities above `u32::MAX` are clamped. Returns `false` if the product
    /// has no line in the cart.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let Some(line) = self.line_mut(id) else {
            return false;
        };

        line.quantity = quantity;

        debug!(product_id = %id, quantity, "updated cart quantity");

        true
    }

    /// Remove a product's line. Returns `false` if there was none.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.id() != id);

        let removed = self.lines.len() != before;

        if removed {
            debug!(product_id = %id, "removed product from cart");
        }

        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Calculate the subtotal of the cart.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic or overflow error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(&self.lines)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Iterate over lines.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Look up the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.id() == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine<'a>> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    /// Number of lines (distinct products).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}
